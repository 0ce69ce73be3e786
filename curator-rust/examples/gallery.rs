use arte_curator::{
    catalog::{FilterSelection, Period, Region},
    generator::{Audience, GenerationOptions, Platform, Tone},
    print::{PrintPreview, PrintSelection},
    project_overview, Curator, CuratorConfig, ViewState,
};
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = CuratorConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let curator = Curator::from_config(&config)?;
    let mut view = ViewState::new();

    view.set_filter(FilterSelection::new(Period::Renaissance, Region::Europe));
    let ticket = view.begin_catalog_load();
    let page = curator.catalog.load(view.filter()).await;
    view.complete_catalog_load(ticket, page);

    let page = view.catalog().ok_or("catalog not loaded")?;
    println!(
        "{} artworks ({:?}) for {} / {}",
        page.artworks.len(),
        page.source,
        view.filter().period.label(),
        view.filter().region.label()
    );
    for artwork in &page.artworks {
        println!("  {} - {} ({})", artwork.title, artwork.artist, artwork.year);
    }

    let Some(artwork) = page.artworks.first().cloned() else {
        return Ok(());
    };
    view.select_artwork(artwork.clone());
    view.set_options(GenerationOptions::new(Audience::Decor, Tone::Poetic));

    let ticket = view.begin_generation();
    let generation = curator.generator.generate(&artwork, view.options()).await;
    view.complete_generation(ticket, generation);

    if let Some(generation) = view.generation() {
        let result = &generation.result;
        println!("\n{} ({:?})", artwork.title, generation.source);
        println!("Contexto: {}", result.historical_context);
        println!("Significado: {}", result.emotional_meaning);
        println!("Curiosidade: {}", result.curiosity);
        println!("Hoje: {}", result.modern_connection);
        println!("Paleta: {}", result.suggested_palette.join(" "));
        for platform in Platform::ALL {
            let post = result.social.post(platform);
            println!(
                "[{}] {} {} {}",
                platform.label(),
                post.hook,
                post.caption,
                post.hashtags.join(" ")
            );
        }
    }

    view.customize();
    let selection: PrintSelection = view.print_selection();
    let preview = PrintPreview::for_artwork(&artwork, selection);
    println!("\nQuadro: {} (preview {}px)", selection.quote(), preview.width_px);

    let order = curator.studio.submit(&artwork, selection).await;
    println!("{}", order.message);

    println!();
    for section in project_overview() {
        println!("{}", section.title);
    }

    Ok(())
}
