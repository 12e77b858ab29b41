//! Cooperative runtime — tick task plus UI event task.
//!
//! Runs on the calling thread using `edge-executor` for cooperative
//! scheduling and `async-io-mini` for reactor-driven timers (no
//! busy-spinning). Two concurrent futures:
//!
//! 1. **Tick** — one control cycle, then sleeps one tick interval
//! 2. **Events** — awaits the UI bridge and dispatches into the service
//!    (wakes as soon as the UI thread posts)
//!
//! ```text
//!  ┌──────────────────────────────────────────────────────────┐
//!  │  futures_lite::future::block_on                          │
//!  │  ┌────────────────────────────────────────────────────┐  │
//!  │  │  edge_executor::LocalExecutor                      │  │
//!  │  │                                                    │  │
//!  │  │  ┌──────────────┐          ┌──────────────────┐    │  │
//!  │  │  │  Tick        │          │  Events (async)  │    │  │
//!  │  │  │  10ms ⏱      │          │  wake-on-post    │    │  │
//!  │  │  └──────┬───────┘          └────────┬─────────┘    │  │
//!  │  └─────────┼───────────────────────────┼──────────────┘  │
//!  │            └──────▶ AppService ◀───────┘                 │
//!  └──────────────────────────────────────────────────────────┘
//! ```

use core::convert::Infallible;
use core::time::Duration;

use log::info;

use crate::app::bridge::UiBridge;
use crate::app::control_loop::ControlLoop;
use crate::app::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};
use crate::app::service::AppService;
use crate::config::SystemConfig;

/// Tick task. The sleep follows the cycle, so the period is the tick
/// interval plus the (short) cycle time.
pub async fn tick_loop<S, A, D, E>(
    mut control: ControlLoop<'_, S, A, D>,
    period: Duration,
    mut sink: E,
) -> Infallible
where
    S: SensorPort,
    A: ActuatorPort,
    D: DisplayPort,
    E: EventSink,
{
    control.start();
    loop {
        control.tick(&mut sink);
        async_io_mini::Timer::after(period).await;
    }
}

/// Event task — wakes when the UI thread posts to the bridge.
pub async fn event_loop<A, D, E>(
    service: &AppService<A, D>,
    bridge: &UiBridge,
    mut sink: E,
) -> Infallible
where
    A: ActuatorPort,
    D: DisplayPort,
    E: EventSink,
{
    loop {
        let event = bridge.receive().await;
        service.handle_event(event, &mut sink);
    }
}

/// Drive both tasks on the calling thread. Never returns.
///
/// `service` must already be started.
pub fn run<S, A, D, E>(
    service: &AppService<A, D>,
    bridge: &UiBridge,
    sensor: S,
    config: SystemConfig,
    sink: E,
) -> Infallible
where
    S: SensorPort,
    A: ActuatorPort,
    D: DisplayPort,
    E: EventSink + Clone,
{
    let executor: edge_executor::LocalExecutor<'_, 4> = edge_executor::LocalExecutor::new();

    let period = config.tick_interval();
    let control = ControlLoop::new(service, sensor, config);

    executor
        .spawn(tick_loop(control, period, sink.clone()))
        .detach();
    executor.spawn(event_loop(service, bridge, sink)).detach();

    info!("Runtime started (tick every {} ms)", period.as_millis());

    futures_lite::future::block_on(executor.run(core::future::pending::<Infallible>()))
}
