use spawn_map::prelude::*;
use spawn_map_demos::{
    init_tracing, render_draw_list_to_png, RenderConfig, SAMPLE_MAP, SAMPLE_MOD,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let vanilla = SpawnConfig::from_json_str(&std::fs::read_to_string(SAMPLE_MAP)?)?;
    let runic = ModSource::from_json_str(&std::fs::read_to_string(SAMPLE_MOD)?)?;

    let sources = builtin_sources();
    let source = pick_by_id(&sources, "runicwyverns")
        .ok_or_else(|| anyhow::anyhow!("empty source catalog"))?;
    let map_id = "The Island";

    let mut config = vanilla.with_override_source(&runic, map_id);
    RarityClassifier::default().classify_config(&mut config);
    info!(
        "{}: {} creatures on {}.",
        source.name,
        config.creatures.len(),
        map_id
    );

    let ctx = PlanContext::new(source.id.clone(), map_id);
    let toggles = VisibilityMap::new();
    let planner = RenderPlanner::default();

    let variants = [
        ("mod-override-glow.png", OverrideStyle::default()),
        (
            "mod-override-plain.png",
            OverrideStyle::default()
                .with_color_hex("#33ccff")
                .with_opacity(0.5)
                .with_emphasis(false),
        ),
    ];

    for (out, style) in variants {
        let mode = PresentationMode::for_source(&ctx.source, style);
        let list = planner.plan_config(&config, "RunicWyvern", &ctx, &toggles, &mode);
        let rc = RenderConfig::new((1024, 1024), config.image_size);
        render_draw_list_to_png(&list, &rc, out)?;
    }

    Ok(())
}
