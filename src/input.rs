use egui::{Context, Key, Modifiers, Pos2, Rect};

use crate::state::{ActionKey, QuasiKey};

/// A keyboard input the sketch reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SketchKey {
    Quasi(QuasiKey),
    Action(ActionKey),
}

/// Domain-level input events. Positions are canvas-local screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { position: Pos2, modifiers: Modifiers },
    /// Pointer moved while a canvas press is held
    PointerDrag { position: Pos2 },
    /// Primary button released after a canvas press
    PointerUp { position: Pos2 },
    KeyDown(SketchKey),
    KeyUp(SketchKey),
}

/// Maps a non-modifier key to the sketch key it triggers, if any.
pub fn map_key(key: Key, modifiers: Modifiers) -> Option<SketchKey> {
    let command = modifiers.command || modifiers.ctrl;
    let mapped = match key {
        Key::Z if command => SketchKey::Action(ActionKey::Undo),
        Key::Y if command => SketchKey::Action(ActionKey::Redo),
        Key::C if !command => SketchKey::Quasi(QuasiKey::Color),
        Key::ArrowUp | Key::CloseBracket => SketchKey::Action(ActionKey::WidenStroke),
        Key::ArrowDown | Key::OpenBracket => SketchKey::Action(ActionKey::NarrowStroke),
        Key::Escape => SketchKey::Action(ActionKey::Escape),
        Key::Delete => SketchKey::Action(ActionKey::Delete),
        Key::Home | Key::H => SketchKey::Action(ActionKey::Home),
        _ => return None,
    };
    Some(mapped)
}

fn modifier_held(modifiers: Modifiers, key: QuasiKey) -> bool {
    match key {
        QuasiKey::Select => modifiers.shift,
        QuasiKey::Pan => modifiers.ctrl || modifiers.mac_cmd,
        QuasiKey::ZoomRotate => modifiers.alt,
        QuasiKey::Color => false,
    }
}

/// Handles converting raw egui input into `InputEvent`s.
///
/// egui reports modifier keys only as state, so Shift / Ctrl / Alt presses
/// and releases are found by comparing the modifier state between frames.
#[derive(Debug, Default)]
pub struct InputHandler {
    modifiers: Modifiers,
    color_key_down: bool,
    /// A press started inside the canvas and has not been released yet
    dragging: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Compares `modifiers` with the previous frame and emits the quasi-mode
    /// key transitions in between.
    pub fn update_modifiers(&mut self, modifiers: Modifiers, events: &mut Vec<InputEvent>) {
        for key in [QuasiKey::Select, QuasiKey::Pan, QuasiKey::ZoomRotate] {
            let was = modifier_held(self.modifiers, key);
            let is = modifier_held(modifiers, key);
            if is && !was {
                events.push(InputEvent::KeyDown(SketchKey::Quasi(key)));
            } else if was && !is {
                events.push(InputEvent::KeyUp(SketchKey::Quasi(key)));
            }
        }
        self.modifiers = modifiers;
    }

    /// Releases every held quasi-mode key, e.g. when the window loses focus
    /// and will never see the real key-up.
    pub fn release_all(&mut self, events: &mut Vec<InputEvent>) {
        self.update_modifiers(Modifiers::NONE, events);
        if self.color_key_down {
            self.color_key_down = false;
            events.push(InputEvent::KeyUp(SketchKey::Quasi(QuasiKey::Color)));
        }
    }

    /// Translates one key event. Auto-repeat never re-enters a quasi-mode.
    pub fn key_event(
        &mut self,
        key: Key,
        pressed: bool,
        repeat: bool,
        modifiers: Modifiers,
        events: &mut Vec<InputEvent>,
    ) {
        // the release of C must match its press even if Ctrl went down since
        if key == Key::C && !pressed && self.color_key_down {
            self.color_key_down = false;
            events.push(InputEvent::KeyUp(SketchKey::Quasi(QuasiKey::Color)));
            return;
        }

        let Some(sketch_key) = map_key(key, modifiers) else {
            return;
        };

        match sketch_key {
            SketchKey::Quasi(QuasiKey::Color) => {
                if pressed && !repeat && !self.color_key_down {
                    self.color_key_down = true;
                    events.push(InputEvent::KeyDown(sketch_key));
                }
            }
            _ if pressed => events.push(InputEvent::KeyDown(sketch_key)),
            _ => events.push(InputEvent::KeyUp(sketch_key)),
        }
    }

    /// Translates the primary-button state of one frame. Positions are made
    /// relative to `canvas_rect`.
    pub fn pointer_frame(
        &mut self,
        canvas_rect: Rect,
        pointer_pos: Option<Pos2>,
        pressed: bool,
        released: bool,
        events: &mut Vec<InputEvent>,
    ) {
        let to_canvas = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        if pressed {
            if let Some(pos) = pointer_pos.filter(|pos| canvas_rect.contains(*pos)) {
                self.dragging = true;
                self.last_pointer_pos = Some(pos);
                events.push(InputEvent::PointerDown {
                    position: to_canvas(pos),
                    modifiers: self.modifiers,
                });
            }
        }

        if self.dragging {
            if let Some(pos) = pointer_pos {
                if Some(pos) != self.last_pointer_pos {
                    self.last_pointer_pos = Some(pos);
                    events.push(InputEvent::PointerDrag {
                        position: to_canvas(pos),
                    });
                }
            }
        }

        if released && self.dragging {
            self.dragging = false;
            let pos = pointer_pos.or(self.last_pointer_pos).unwrap_or(canvas_rect.min);
            self.last_pointer_pos = None;
            events.push(InputEvent::PointerUp {
                position: to_canvas(pos),
            });
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            for event in &input.raw.events {
                match event {
                    egui::Event::Key {
                        key,
                        pressed,
                        repeat,
                        modifiers,
                        ..
                    } => {
                        self.update_modifiers(*modifiers, &mut events);
                        self.key_event(*key, *pressed, *repeat, *modifiers, &mut events);
                    }
                    egui::Event::WindowFocused(false) => self.release_all(&mut events),
                    _ => {}
                }
            }
            self.update_modifiers(input.modifiers, &mut events);

            self.pointer_frame(
                canvas_rect,
                input.pointer.interact_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
                &mut events,
            );
        });

        events
    }
}
