use clap::Args;

use recipebox_core::{KeyValueStore, RecipeStore, StoreStats};

use super::OutputFormat;

#[derive(Args)]
pub struct StatsCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl StatsCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        store: &RecipeStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let stats = store.stats();
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            OutputFormat::Text => println!("{}", render(&stats)),
        }
        Ok(())
    }
}

fn render(stats: &StoreStats) -> String {
    let hours = stats.total_minutes / 60;
    let minutes = stats.total_minutes % 60;
    format!(
        "Recipes:        {}\nFavorites:      {}\nGrocery items:  {}\nTotal time:     {}h {}m",
        stats.recipes, stats.favorites, stats.grocery_items, hours, minutes
    )
}
