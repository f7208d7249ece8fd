//! Demo application: swipe to pan a camera

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec3;
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::window::window_attributes_from_config;
use crate::config::AppConfig;
use crate::gesture::{GestureDispatcher, SharedHandler};
use crate::handlers::{Camera, CameraPanHandler, GroundProjection};
use crate::input::{InputCollector, select_source};
use crate::motion::Motion;

/// Camera height above the ground plane
const CAMERA_HEIGHT: f32 = 10.0;

/// Main demo application
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    last_update: Option<Instant>,
    input_collector: InputCollector,
    dispatcher: GestureDispatcher,
    camera: Rc<RefCell<CameraPanHandler>>,
    last_camera_position: Vec3,
}

impl App {
    /// Creates the application and registers the camera pan handler
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting swipe demo");
        info!(?config.gesture, ?config.inertia, "Gesture configuration");

        let source = select_source(config.gesture.input_mode);
        let mut dispatcher = GestureDispatcher::new(source, config.gesture.clone());

        let camera_position = Vec3::new(0.0, CAMERA_HEIGHT, 0.0);
        let camera = Rc::new(RefCell::new(CameraPanHandler::new(
            Camera::new(camera_position),
            Box::new(GroundProjection::new(
                &config.camera,
                config.window.height as f32,
            )),
            config.inertia,
        )));
        let handle: SharedHandler = camera.clone();
        dispatcher.register(&handle);

        Self {
            config,
            window: None,
            last_update: None,
            input_collector: InputCollector::new(),
            dispatcher,
            camera,
            last_camera_position: camera_position,
        }
    }

    /// Runs one frame: dispatch gestures, then inertia, then settle input edges
    fn update(&mut self, delta_time: f32) {
        self.dispatcher
            .tick(self.input_collector.state(), delta_time);
        self.camera.borrow_mut().tick(delta_time);
        self.input_collector.advance_frame();

        let position = self.camera.borrow().camera().position;
        if position != self.last_camera_position {
            debug!(
                x = position.x,
                z = position.z,
                gliding = self.camera.borrow().is_moving(),
                "Camera moved"
            );
            self.last_camera_position = position;
        }
    }

    fn handle_resize(&mut self, height: u32) {
        let scale_factor = self
            .window
            .as_ref()
            .map(|w| w.scale_factor() as f32)
            .unwrap_or(1.0);
        let logical_height = height as f32 / scale_factor;

        self.camera
            .borrow_mut()
            .set_projection(Box::new(GroundProjection::new(
                &self.config.camera,
                logical_height,
            )));
        debug!(logical_height, "Projection updated for new viewport");
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = window_attributes_from_config(&self.config.window);

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    let size = window.inner_size();
                    info!(
                        window.width = size.width,
                        window.height = size.height,
                        source = self.dispatcher.source_name(),
                        "Window created successfully"
                    );
                    self.input_collector
                        .set_scale_factor(window.scale_factor() as f32);
                    self.window = Some(Arc::new(window));
                    self.last_update = Some(Instant::now());
                }
                Err(e) => {
                    error!(error = %e, "Failed to create window");
                    event_loop.exit();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(last_update) = self.last_update {
            let now = Instant::now();
            let delta_time = (now - last_update).as_secs_f32();
            self.last_update = Some(now);

            self.update(delta_time);

            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Feed events to input collector FIRST so every raw event is seen
        self.input_collector.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.input_collector.set_scale_factor(scale_factor as f32);
            }
            WindowEvent::Resized(new_size) => self.handle_resize(new_size.height),
            _ => {}
        }
    }
}
