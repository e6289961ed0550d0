use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use clap::Args;
use tokio::sync::{mpsc, Mutex};
use wellday_core::planner::EyeRestState;
use wellday_core::timer::TICK_PERIOD;
use wellday_core::{format_countdown, Config, CountdownKind, Event, PlannerSession, Ticker};

use super::PlannerArgs;

#[derive(Args)]
pub struct WatchArgs {
    #[command(flatten)]
    planner: PlannerArgs,
    /// Stop after this many seconds (runs until Ctrl-C when omitted)
    #[arg(long)]
    ticks: Option<u64>,
    /// Log water before starting, in ml (repeatable)
    #[arg(long = "log", value_name = "ML")]
    log: Vec<u32>,
    /// Push the first eye-rest reminder back by 60s, this many times
    #[arg(long, default_value_t = 0)]
    snooze_eye: u32,
    /// Output JSON snapshots and events
    #[arg(long)]
    json: bool,
}

fn status_line<Tz: TimeZone>(session: &PlannerSession, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let hydration = &session.hydration().countdown;
    let eye = &session.eye().countdown;
    format!(
        "hydration {} (next {}) | eye rest {} (next {}) | water {}/{} ml ({}%)",
        hydration.display(),
        hydration.next_reminder_clock(now),
        eye.display(),
        eye.next_reminder_clock(now),
        session.hydration().logged_ml(),
        session.hydration().goal_ml(),
        session.hydration_progress_pct(),
    )
}

fn reminder_text(event: &Event) -> Option<String> {
    match event {
        Event::ReminderDue {
            countdown,
            next_in_secs,
            ..
        } => {
            let what = match countdown {
                CountdownKind::Hydration => "time to drink some water",
                CountdownKind::EyeRest => "look 6 metres away for 20 seconds",
            };
            Some(format!(
                "reminder: {what} (next in {})",
                format_countdown(*next_in_secs)
            ))
        }
        _ => None,
    }
}

async fn watch(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut session = PlannerSession::new(args.planner.resolve(&config))?;
    for ml in &args.log {
        session.log_water(*ml);
    }
    for _ in 0..args.snooze_eye {
        session.extend_eye(EyeRestState::EXTENSION_SECS);
    }
    let json = args.json || config.display.json;

    let session = Arc::new(Mutex::new(session));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut ticker = Ticker::start(Arc::clone(&session), tx);
    tracing::info!(ticks = ?args.ticks, "watch started");

    let mut display = tokio::time::interval(TICK_PERIOD);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut shown: u64 = 0;

    loop {
        tokio::select! {
            _ = display.tick() => {
                let line = {
                    let s = session.lock().await;
                    if json {
                        serde_json::to_string(&s.snapshot())?
                    } else {
                        status_line(&s, &Local::now())
                    }
                };
                println!("{line}");
                if args.ticks.is_some_and(|limit| shown >= limit) {
                    break;
                }
                shown += 1;
            }
            Some(event) = rx.recv() => {
                if json {
                    println!("{}", serde_json::to_string(&event)?);
                } else if let Some(text) = reminder_text(&event) {
                    println!("{text}");
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("interrupted");
                break;
            }
        }
    }

    ticker.shutdown();
    Ok(())
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch(args))
}
