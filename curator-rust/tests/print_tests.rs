use std::time::Duration;

use arte_curator::{
    fallback_catalog,
    print::{FrameStyle, PrintPreview, PrintSelection, PrintSize, PrintStudio},
};
use tokio::time::Instant;

#[test]
fn prices_follow_the_size() {
    let prices: Vec<_> = PrintSize::ALL
        .into_iter()
        .map(|size| PrintSelection::new(size, FrameStyle::None).price().to_string())
        .collect();
    assert_eq!(prices, ["R$ 189", "R$ 299", "R$ 459"]);

    for frame in FrameStyle::ALL {
        assert_eq!(
            PrintSelection::new(PrintSize::Medium, frame).price(),
            PrintSize::Medium.price()
        );
    }
}

#[test]
fn framed_preview_uses_frame_color() {
    let artwork = fallback_catalog().remove(1);
    let preview = PrintPreview::for_artwork(
        &artwork,
        PrintSelection::new(PrintSize::Large, FrameStyle::Wood),
    );

    assert_eq!(preview.width_px, 500);
    let border = preview.border.unwrap();
    assert_eq!(border.width_px, 12);
    assert_eq!(border.color, "#8c6a5a");
    assert!(preview.inner_shadow);
}

#[tokio::test(start_paused = true)]
async fn submit_waits_then_acknowledges() {
    let artwork = fallback_catalog().remove(2);
    let studio = PrintStudio::default();

    let started = Instant::now();
    let order = studio.submit(&artwork, PrintSelection::default()).await;

    assert!(started.elapsed() >= Duration::from_millis(2000));
    assert_eq!(order.artwork_id, "Q499697");
    assert_eq!(order.quote.total.to_string(), "R$ 299");
    assert_eq!(order.message, "Pedido simulado enviado para produção!");
}

#[tokio::test(start_paused = true)]
async fn mockup_suggestion_is_a_stub() {
    let artwork = fallback_catalog().remove(0);
    let studio = PrintStudio::default();

    let started = Instant::now();
    let mockup = studio.suggest_mockup(&artwork, "calmo", "Sala de Estar").await;

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(mockup.room_type, "Sala de Estar");
    assert_eq!(mockup.selection, PrintSelection::default());
}

#[tokio::test]
async fn delays_are_configurable() {
    let studio = PrintStudio::new().with_delays(Duration::ZERO, Duration::ZERO);
    let artwork = fallback_catalog().remove(0);

    let order = studio
        .submit(&artwork, PrintSelection::new(PrintSize::Small, FrameStyle::White))
        .await;
    assert_eq!(order.quote.size_label, "30x40cm");
    assert_eq!(order.quote.frame_label, "Branca Clean");
}
