use std::collections::HashSet;
use std::path::Path;

use glam::Vec2;
use image::{Rgba, RgbaImage};
use spawn_map::prelude::{Color, DashPattern, DrawCommand, DrawList, ImageSize, Shape};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Output image and the map-pixel domain it shows.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// Size of the source map image the draw list is expressed in.
    pub domain: Vec2,
    pub background: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), domain: ImageSize) -> Self {
        Self {
            image_size,
            domain: domain.extent().max(Vec2::ONE),
            background: [24, 28, 36],
        }
    }

    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.background = rgb;
        self
    }

    fn scale(&self) -> Vec2 {
        Vec2::new(self.image_size.0 as f32, self.image_size.1 as f32) / self.domain
    }
}

/// Rasterizes `list` in paint order and writes a PNG to `path`.
///
/// Areas are scaled to the output; point markers keep their radius in output pixels.
pub fn render_draw_list_to_png(
    list: &DrawList,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let [r, g, b] = config.background;
    let mut img = RgbaImage::from_pixel(w, h, Rgba([r, g, b, 255]));
    let scale = config.scale();

    for command in list.in_draw_order() {
        draw_command(&mut img, command, scale);
    }

    img.save(path.as_ref())?;
    info!("Wrote {} ({} commands).", path.as_ref().display(), list.len());
    Ok(())
}

fn draw_command(img: &mut RgbaImage, command: &DrawCommand, scale: Vec2) {
    let style = &command.style;
    let half = (style.stroke_weight * 0.5).max(0.5);

    match command.shape {
        Shape::Area { top_left, size } => {
            // negative sizes extend up/left
            let a = top_left * scale;
            let b = (top_left + size) * scale;
            let min = a.min(b);
            let max = a.max(b);

            let stroke = rect_outline(min, max, half, style.dash);
            let fill = style.fill_color.to_rgba8(style.fill_opacity);
            for y in min.y.floor() as i32..max.y.ceil() as i32 {
                for x in min.x.floor() as i32..max.x.ceil() as i32 {
                    if !stroke.contains(&(x, y)) {
                        blend(img, x, y, fill);
                    }
                }
            }
            paint(img, &stroke, style.stroke_color, style.stroke_opacity);
        }
        Shape::Point { center, radius } => {
            let c = center * scale;
            let fill = style.fill_color.to_rgba8(style.fill_opacity);
            let mut stroke = HashSet::new();
            let reach = (radius + half).ceil() as i32;
            for dy in -reach..=reach {
                for dx in -reach..=reach {
                    let d = Vec2::new(dx as f32, dy as f32).length();
                    let (x, y) = (c.x.round() as i32 + dx, c.y.round() as i32 + dy);
                    if (d - radius).abs() <= half {
                        stroke.insert((x, y));
                    } else if d < radius {
                        blend(img, x, y, fill);
                    }
                }
            }
            paint(img, &stroke, style.stroke_color, style.stroke_opacity);
        }
    }
}

/// Pixels covered by the outline of the box `[min, max]`, walking the perimeter clockwise
/// so the dash phase runs continuously around corners.
fn rect_outline(
    min: Vec2,
    max: Vec2,
    half: f32,
    dash: Option<DashPattern>,
) -> HashSet<(i32, i32)> {
    let corners = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
    let mut pixels = HashSet::new();
    let mut travelled = 0.0;

    for i in 0..4 {
        let from = corners[i];
        let to = corners[(i + 1) % 4];
        let len = from.distance(to);
        let steps = len.ceil().max(1.0) as i32;
        for s in 0..=steps {
            let t = s as f32 / steps as f32;
            let along = travelled + t * len;
            if dash.is_some_and(|d| !d.is_on(along)) {
                continue;
            }
            let p = from.lerp(to, t);
            let r = half.ceil() as i32;
            for dy in -r..r.max(1) {
                for dx in -r..r.max(1) {
                    pixels.insert((p.x as i32 + dx, p.y as i32 + dy));
                }
            }
        }
        travelled += len;
    }

    pixels
}

fn paint(img: &mut RgbaImage, pixels: &HashSet<(i32, i32)>, color: Color, opacity: f32) {
    let rgba = color.to_rgba8(opacity);
    for &(x, y) in pixels {
        blend(img, x, y, rgba);
    }
}

fn blend(img: &mut RgbaImage, x: i32, y: i32, src: [u8; 4]) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let a = src[3] as f32 / 255.0;
    let dst = img.get_pixel_mut(x as u32, y as u32);
    for c in 0..3 {
        dst.0[c] = (src[c] as f32 * a + dst.0[c] as f32 * (1.0 - a)).round() as u8;
    }
}
