use anyhow::Result;
use savora::{RecipeStore, StoreConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let info = savora::app_info();
    log::info!("{} {}", info.name, info.version);

    let store = RecipeStore::new(StoreConfig::default());
    store.fetch_recipes().await;

    let state = store.snapshot();
    println!(
        "{} recipes loaded, page {} of {}",
        state.recipes.len(),
        state.current_page,
        state.total_pages()
    );
    for recipe in state.current_page_recipes() {
        println!(
            "  #{:<4} {:<40} {:<8} {:>4} kcal",
            recipe.id, recipe.name, recipe.difficulty, recipe.calories_per_serving
        );
    }

    Ok(())
}
