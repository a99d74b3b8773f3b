use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use monkey_viewer::cli::Cli;
use monkey_viewer::config::ViewerConfig;
use monkey_viewer::core::{Clock, FrameCounter, WinitController};
use monkey_viewer::loaders::AssetCache;
use monkey_viewer::renderer::MeshRenderer;
use monkey_viewer::scene::ViewportScene;

struct App {
    config: ViewerConfig,
    scene: ViewportScene,
    window: Option<Arc<Window>>,
    renderer: Option<MeshRenderer>,
    controller: WinitController,
    clock: Clock,
    frames: FrameCounter,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: ViewerConfig, scene: ViewportScene) -> Self {
        Self {
            config,
            scene,
            window: None,
            renderer: None,
            controller: WinitController::new(),
            clock: Clock::new(),
            frames: FrameCounter::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(self.config.title.clone())
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.config.window_width,
                        self.config.window_height,
                    )),
            )
            .context("Failed to create window")?;
        let window = Arc::new(window);

        let mut renderer = pollster::block_on(MeshRenderer::new(window.clone(), &self.config))
            .context("Failed to initialize renderer")?;
        if let Some(asset) = self.scene.model() {
            renderer.set_mesh(asset);
        }

        // Frame time starts counting from the first presented frame
        self.clock.reset();
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let frame = self.frames.advance(self.clock.tick());

        let height = renderer.size().height as f32;
        self.scene.camera_mut().update(&self.controller, height);
        self.controller.reset_deltas();

        self.scene.tick(frame.delta);

        match renderer.render(&self.scene, window) {
            Ok(()) => {
                if self.scene.mark_created() {
                    log::info!(
                        "First frame presented after {} ticks ({:.3}s)",
                        frame.number + 1,
                        frame.time
                    );
                }
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                let error = anyhow!("GPU out of memory");
                log::error!("{:#}", error);
                self.error = Some(error);
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => self.controller.process_event(&other),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!(
            "Exiting after {} frames, last sample {:.1} FPS",
            self.frames.frame_count(),
            self.frames.fps()
        );
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let mut assets = AssetCache::new(config.asset_root.clone());
    let model = assets
        .load(&config.model)
        .with_context(|| {
            format!(
                "Failed to load model {:?} from asset root {:?} (see --assets/--model)",
                config.model,
                assets.root()
            )
        })?;
    log::info!(
        "Model {} ready: {} triangles",
        config.model,
        model.triangle_count()
    );

    let scene = ViewportScene::new(&config, Some(model));
    log::debug!("Lighting: {:?}", scene.lighting());

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, scene);

    log::info!("Controls: drag to orbit, right-drag to pan, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
