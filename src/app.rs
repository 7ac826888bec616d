use crate::config;
use crate::drum::layout::OverlayLayout;
use crate::drum::overlay::DrumTouchArea;
use crate::drum::zone::TouchControlScheme;
use crate::drum::{ActionSink, DrumAction};
use crate::input;
use crate::notify::{NotificationIcon, NotificationQueue};
use crate::options::{self, SettableValue};
use crate::settings;
use cgmath::Point2;
use log::{debug, error, info};
use std::error::Error;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseButton, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Keybinding sink for the demo shell: logs each logical transition. A game
/// would hand the overlay its judge/dispatch layer instead.
struct LogSink {
    label: &'static str,
}

impl ActionSink for LogSink {
    fn pressed(&mut self, action: DrumAction) {
        info!("[{}] {:?} pressed", self.label, action);
    }
    fn released(&mut self, action: DrumAction) {
        info!("[{}] {:?} released", self.label, action);
    }
}

pub struct App {
    window: Option<Arc<Window>>,
    overlay: Option<DrumTouchArea<LogSink>>,
    key_sink: LogSink,
    scheme: TouchControlScheme,
    overlay_enabled: bool,
    notifications: NotificationQueue,
    cursor: Point2<f32>,
    mouse_held: bool,
    display_width: u32,
    display_height: u32,
}

impl App {
    pub fn new() -> Self {
        let settings = settings::get();
        info!(
            "Touch control scheme: {} (overlay {})",
            settings.touch_scheme.as_str(),
            if settings.touch_overlay_enabled { "enabled" } else { "disabled" }
        );
        for zone in crate::drum::zone::ALL_ZONES {
            debug!("{:?} -> {:?}", zone, crate::drum::zone::action_for_zone(zone, settings.touch_scheme));
        }
        for row in options::build_rows(&settings) {
            debug!("option: {} ({:?})", row.name, options::control_for(&row.value));
        }

        Self {
            window: None,
            overlay: None,
            key_sink: LogSink { label: "key" },
            scheme: settings.touch_scheme,
            overlay_enabled: settings.touch_overlay_enabled,
            notifications: NotificationQueue::new(),
            cursor: Point2::new(0.0, 0.0),
            mouse_held: false,
            display_width: settings.display_width,
            display_height: settings.display_height,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), Box<dyn Error>> {
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        let window_attributes = Window::default_attributes()
            .with_title(config::WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(self.display_width, self.display_height))
            .with_resizable(true);

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let sz = window.inner_size();
        self.overlay = Some(DrumTouchArea::new(
            OverlayLayout::for_window(sz.width, sz.height),
            self.scheme,
            LogSink { label: "touch" },
        ));
        self.window = Some(window);
        info!("Starting event loop...");
        Ok(())
    }

    /// F2 cycles the persisted touch scheme through the option rows. The
    /// scheme is read once per session, so the new value applies on restart.
    fn cycle_touch_scheme(&mut self) {
        let mut current = settings::get();
        let mut rows = options::build_rows(&current);
        if let Some(SettableValue::Choice { choices, selected }) =
            rows.iter_mut().map(|r| &mut r.value).find(|v| matches!(v, SettableValue::Choice { .. }))
        {
            *selected = (*selected + 1) % choices.len();
        }
        options::apply_rows(&rows, &mut current);
        settings::save(&current);

        let text = format!(
            "Touch control scheme set to {} (applies next session)",
            current.touch_scheme.as_str()
        );
        info!("{}", text);
        self.notifications.post(text, NotificationIcon::Info);
    }

    /// F3 marks everything read and drops it from the queue.
    fn dismiss_notifications(&mut self) {
        let count = self.notifications.unread_count();
        for i in 0..self.notifications.entries().len() {
            self.notifications.mark_read(i);
        }
        self.notifications.drain_read();
        if count > 0 {
            info!("Dismissed {} notification(s)", count);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                error!("Failed to initialize window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_ref() else { return };
        if window_id != window.id() {
            return;
        }
        let Some(overlay) = self.overlay.as_mut() else { return };

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested. Shutting down.");
                for n in self.notifications.entries().iter().filter(|n| !n.read) {
                    info!(
                        "Unread {:?} notification [{}]: {}",
                        n.icon,
                        n.posted_at.format("%H:%M:%S"),
                        n.text
                    );
                }
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    overlay.set_layout(OverlayLayout::for_window(new_size.width, new_size.height));
                }
            }
            WindowEvent::Focused(false) => {
                // Touches never get their up-events after focus loss.
                overlay.cancel_all();
                self.mouse_held = false;
            }
            WindowEvent::Touch(touch) => {
                if !self.overlay_enabled {
                    return;
                }
                let point = Point2::new(touch.location.x as f32, touch.location.y as f32);
                match touch.phase {
                    TouchPhase::Started => {
                        overlay.touch_down(touch.id, point);
                    }
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        overlay.touch_up(touch.id);
                    }
                    TouchPhase::Moved => {}
                }
                if overlay.visible() {
                    window.set_title(&format!(
                        "{} - {} | {} touches",
                        config::WINDOW_TITLE,
                        self.scheme.as_str(),
                        overlay.active_touches()
                    ));
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                if !self.overlay_enabled {
                    return;
                }
                match state {
                    // Unlike touches, mouse presses only count on the drum itself.
                    ElementState::Pressed if overlay.layout().contains(self.cursor) => {
                        overlay.touch_down(config::MOUSE_SOURCE, self.cursor);
                        self.mouse_held = true;
                    }
                    ElementState::Released if self.mouse_held => {
                        overlay.touch_up(config::MOUSE_SOURCE);
                        self.mouse_held = false;
                    }
                    _ => {}
                }
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                use winit::keyboard::{KeyCode, PhysicalKey};

                if key_event.state == ElementState::Pressed {
                    // Hide the overlay whenever the keyboard is used.
                    overlay.key_down();

                    match key_event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => {
                            info!("Escape pressed. Shutting down.");
                            event_loop.exit();
                            return;
                        }
                        PhysicalKey::Code(KeyCode::F2) => {
                            if !key_event.repeat {
                                self.cycle_touch_scheme();
                            }
                            return;
                        }
                        PhysicalKey::Code(KeyCode::F3) => {
                            if !key_event.repeat {
                                self.dismiss_notifications();
                            }
                            return;
                        }
                        _ => {}
                    }
                }

                let PhysicalKey::Code(code) = key_event.physical_key else { return };
                let Some(action) = input::action_from_keycode(code) else { return };
                match key_event.state {
                    ElementState::Pressed if !key_event.repeat => self.key_sink.pressed(action),
                    ElementState::Released => self.key_sink.released(action),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
