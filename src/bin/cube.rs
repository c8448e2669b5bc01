//! Rotating-cube demo: a per-face-colored cube tumbling indefinitely.

use anyhow::Result;

use glint::core::{App, AppControl, FrameCtx};
use glint::device::GpuInit;
use glint::logging::{LoggingConfig, init_logging};
use glint::scene::CubeScene;
use glint::window::{Runtime, RuntimeConfig};

#[derive(Default)]
struct CubeApp {
    scene: Option<CubeScene>,
}

impl App for CubeApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // The scene is built on the first frame, once the device exists, and
        // reused unchanged for every frame after.
        if self.scene.is_none() {
            match CubeScene::new(ctx.gpu.device(), ctx.gpu.surface_format()) {
                Ok(scene) => self.scene = Some(scene),
                Err(e) => {
                    // Propagates out of Runtime::run; reported once by main.
                    return AppControl::Fail(e.context("cube scene initialization failed"));
                }
            }
        }

        let Some(scene) = self.scene.as_mut() else {
            return AppControl::Exit;
        };

        let dt = ctx.time.dt;
        ctx.render(|gpu, frame| scene.render(gpu, frame, dt))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(
        RuntimeConfig {
            title: "glint: cube".to_string(),
            ..Default::default()
        },
        GpuInit::default(),
        CubeApp::default(),
    )
}
