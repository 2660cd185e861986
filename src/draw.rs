use std::f64::consts::TAU;

use shared::{Link, Palette, Particle, Viewport};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub fn draw_vignette(
    context: &CanvasRenderingContext2d,
    viewport: &Viewport,
    palette: &Palette,
) -> Result<(), JsValue> {
    let (width, height) = (viewport.width, viewport.height);
    let (cx, cy) = (width * 0.8, height * -0.1);

    let gradient = context.create_radial_gradient(cx, cy, 0.0, cx, cy, width.max(height))?;
    gradient.add_color_stop(0.0, &palette.vignette_inner)?;
    gradient.add_color_stop(1.0, &palette.vignette_outer)?;

    #[allow(deprecated)]
    context.set_fill_style(&gradient);
    context.fill_rect(0.0, 0.0, width, height);

    Ok(())
}

pub fn draw_particle(context: &CanvasRenderingContext2d, particle: &Particle) -> Result<(), JsValue> {
    context.begin_path();
    context.arc(
        particle.position.x,
        particle.position.y,
        particle.radius,
        0.0,
        TAU,
    )?;
    context.fill();

    Ok(())
}

pub fn draw_link(context: &CanvasRenderingContext2d, link: &Link) {
    context.set_line_width(link.width);
    context.begin_path();
    context.move_to(link.from.x, link.from.y);
    context.line_to(link.to.x, link.to.y);
    context.stroke();
}
