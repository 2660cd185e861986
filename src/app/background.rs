use std::{cell::RefCell, rc::Rc};

use log::info;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use shared::{Palette, ParticleField, ParticleSettings, Settings, Viewport};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::AppError;
use crate::{
    document,
    draw::{draw_link, draw_particle, draw_vignette},
    frame::{run_frames, FrameHandle},
    viewport, window,
};

const CANVAS_SELECTOR: &str = "#bg-canvas";

/// The drifting particle field painted behind the page.
pub struct Background {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    particle_settings: ParticleSettings,
    palette: Palette,
    field: ParticleField,
    rng: ChaCha8Rng,
}

impl Background {
    pub fn new(canvas: HtmlCanvasElement, settings: &Settings) -> Result<Background, AppError> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| AppError::missing("2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::new("2d context has an unexpected type"))?;

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;

        Ok(Background {
            canvas,
            context,
            particle_settings: settings.particles.clone(),
            palette: settings.palette.clone(),
            field: ParticleField::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Matches the canvas to `viewport` and scatters a fresh set of particles.
    pub fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);

        self.field = ParticleField::populate(viewport, &self.particle_settings, &mut self.rng);
    }

    pub fn tick_and_draw(&mut self) -> Result<(), JsValue> {
        let context = &self.context;
        let viewport = *self.field.viewport();

        context.clear_rect(0.0, 0.0, viewport.width, viewport.height);
        draw_vignette(context, &viewport, &self.palette)?;

        self.field.tick();

        context.set_global_composite_operation("lighter")?;
        context.set_fill_style_str(&self.palette.particle);

        for particle in self.field.particles() {
            draw_particle(context, particle)?;
        }

        context.set_stroke_style_str(&self.palette.link);

        for link in self.field.links(&self.particle_settings) {
            draw_link(context, &link);
        }

        context.set_global_composite_operation("source-over")?;

        Ok(())
    }
}

pub fn install(settings: &Settings) -> Result<FrameHandle, AppError> {
    let canvas = document()
        .query_selector(CANVAS_SELECTOR)?
        .ok_or_else(|| AppError::missing(CANVAS_SELECTOR))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| AppError::new(format!("`{CANVAS_SELECTOR}` is not a canvas")))?;

    let background = Rc::new(RefCell::new(Background::new(canvas, settings)?));
    background.borrow_mut().resize(viewport());

    {
        let background = background.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| {
            background.borrow_mut().resize(viewport());
        });
        window().add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    info!(
        "background: {} particles on {:?}",
        background.borrow().field.len(),
        background.borrow().field.viewport()
    );

    Ok(run_frames(move || background.borrow_mut().tick_and_draw())?)
}
