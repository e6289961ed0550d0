use clap::Subcommand;
use serde::Serialize;
use wellday_core::planner::PresetValues;
use wellday_core::Preset;

#[derive(Subcommand)]
pub enum PresetAction {
    /// List all presets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one preset
    Show {
        /// Preset name: desk, active or calm
        name: Preset,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct PresetRow {
    name: Preset,
    #[serde(flatten)]
    values: PresetValues,
}

fn describe(preset: Preset) -> String {
    let v = preset.values();
    format!(
        "{:<7} focus={:<8} movement={}m eye={}m hydration={}m",
        preset.name(),
        v.focus.as_str(),
        v.movement_interval,
        v.eye_interval,
        v.hydration_interval
    )
}

pub fn run(action: PresetAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PresetAction::List { json } => {
            if json {
                let rows: Vec<PresetRow> = Preset::ALL
                    .into_iter()
                    .map(|name| PresetRow {
                        name,
                        values: name.values(),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for preset in Preset::ALL {
                    println!("{}", describe(preset));
                }
            }
        }
        PresetAction::Show { name, json } => {
            if json {
                let row = PresetRow {
                    name,
                    values: name.values(),
                };
                println!("{}", serde_json::to_string_pretty(&row)?);
            } else {
                println!("{}", describe(name));
            }
        }
    }
    Ok(())
}
