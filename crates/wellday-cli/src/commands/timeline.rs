use clap::Subcommand;
use wellday_core::{Config, PlannerSession, Timeline};

use super::PlannerArgs;

#[derive(Subcommand)]
pub enum TimelineAction {
    /// Print the reminder timeline for the day
    Show {
        #[command(flatten)]
        planner: PlannerArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Hide the benefit line under each event
        #[arg(long)]
        brief: bool,
    },
}

fn render(timeline: &Timeline, show_benefits: bool) -> String {
    let mut out = String::new();
    for slot in timeline.slots() {
        for (i, event) in slot.events.iter().enumerate() {
            let label = if i == 0 { slot.clock.as_str() } else { "" };
            out.push_str(&format!("{label:<9} [{}] {}\n", event.kind, event.title));
            out.push_str(&format!("{:<9} {}\n", "", event.description));
            if show_benefits {
                out.push_str(&format!("{:<9} why: {}\n", "", event.benefit));
            }
        }
    }
    out
}

pub fn run(action: TimelineAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimelineAction::Show {
            planner,
            json,
            brief,
        } => {
            let config = Config::load_or_default();
            let mut session = PlannerSession::new(planner.resolve(&config))?;
            let (wake, bed, focus) = {
                let c = session.config();
                (c.wake, c.bed, c.focus)
            };
            let timeline = session.timeline();

            if json || config.display.json {
                println!("{}", serde_json::to_string_pretty(timeline)?);
            } else {
                print!("{}", render(timeline, config.display.show_benefits && !brief));
                println!(
                    "{} reminders across {} slots ({wake} -> {bed}, focus {focus})",
                    timeline.event_count(),
                    timeline.len()
                );
            }
        }
    }
    Ok(())
}
