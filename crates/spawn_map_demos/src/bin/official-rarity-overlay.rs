use spawn_map::prelude::*;
use spawn_map_demos::{init_tracing, render_draw_list_to_png, RenderConfig, SAMPLE_MAP};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let json = std::fs::read_to_string(SAMPLE_MAP)?;
    let mut config = SpawnConfig::from_json_str(&json)?;
    let classified = RarityClassifier::default().classify_config(&mut config);
    info!("Classified {} entries.", classified);

    let maps = builtin_maps();
    let map = pick_by_id(&maps, "The Island").ok_or_else(|| anyhow::anyhow!("empty map catalog"))?;
    let ctx = PlanContext::new(SourceId::Official, map.id.clone());

    // list creatures the way a selector would
    for key in config.creature_keys_sorted() {
        let Some(creature) = config.creature(key) else {
            continue;
        };
        let creature_info = CreatureInfo::from_definition(key, creature);
        info!(
            "{} ({} entries, bp: {})",
            creature_info.name,
            creature_info.entry_count,
            creature_info.blueprint_path.as_deref().unwrap_or("(none)")
        );
        for summary in CreatureInfo::entries(creature) {
            info!(
                "  [{}] {} {} rarity={}",
                summary.index,
                summary.label,
                summary.meta_line(),
                summary.rarity.map_or("-", Rarity::label)
            );
        }
    }

    // hide the beach entry to show toggles at work
    let mut toggles = VisibilityMap::new();
    toggles.set(ctx.key("Raptor", 0), false);

    let mut sink = VecSink::only(&[PlanEventKind::RegionCollapsed, PlanEventKind::EntryHidden]);
    let list = RenderPlanner::default().plan_config_with_events(
        &config,
        "Raptor",
        &ctx,
        &toggles,
        &PresentationMode::Official,
        &mut sink,
    );
    for event in sink.as_slice() {
        info!("{:?}", event);
    }

    let rc = RenderConfig::new((1024, 1024), config.image_size);
    render_draw_list_to_png(&list, &rc, "official-rarity-overlay.png")?;
    Ok(())
}
