//! Flat-square demo: a static white square on a black background.

use anyhow::Result;

use glint::core::{App, AppControl, FrameCtx};
use glint::device::GpuInit;
use glint::logging::{LoggingConfig, init_logging};
use glint::scene::SquareScene;
use glint::window::{Runtime, RuntimeConfig};

#[derive(Default)]
struct SquareApp {
    scene: Option<SquareScene>,
}

impl App for SquareApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // The scene is built on the first frame, once the device exists, and
        // reused unchanged for every frame after.
        if self.scene.is_none() {
            match SquareScene::new(ctx.gpu.device(), ctx.gpu.surface_format()) {
                Ok(scene) => self.scene = Some(scene),
                Err(e) => {
                    // Propagates out of Runtime::run; reported once by main.
                    return AppControl::Fail(e.context("square scene initialization failed"));
                }
            }
        }

        let Some(scene) = self.scene.as_ref() else {
            return AppControl::Exit;
        };

        ctx.render(|gpu, frame| scene.render(gpu, frame))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(
        RuntimeConfig {
            title: "glint: square".to_string(),
            ..Default::default()
        },
        GpuInit::default(),
        SquareApp::default(),
    )
}
