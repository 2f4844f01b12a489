use std::{cell::RefCell, rc::Rc};

use log::trace;

use crate::{
    events::{Destroyable, EventEmitter, EventObserver, Unsubscriber},
    layout::Settings,
    model::{
        InputEvent, Modifiers, ModuleEdit, MosaicCommand, Orientation, Palette, PointerKind,
        PointerTarget, Position,
    },
};

const SW_KEYS: [&str; 2] = ["z", ";"];
const NW_KEYS: [&str; 2] = ["x", "q"];

/// Turns raw pointer and keyboard input into mosaic commands.
pub struct InputTranslator {
    command_emitter: EventEmitter<MosaicCommand>,
    palette: Palette,
    held_key: Option<String>,
    input_subscription: Option<Unsubscriber<InputEvent>>,
}

impl Destroyable for InputTranslator {
    fn destroy(&mut self) {
        if let Some(subscription) = self.input_subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl InputTranslator {
    pub fn new(
        command_emitter: EventEmitter<MosaicCommand>,
        input_event_observer: EventObserver<InputEvent>,
        settings: &Settings,
    ) -> Rc<RefCell<Self>> {
        let input_translator = Rc::new(RefCell::new(Self {
            command_emitter,
            palette: settings.palette.clone(),
            held_key: None,
            input_subscription: None,
        }));

        InputTranslator::bind_input_observer(input_translator.clone(), input_event_observer);

        input_translator
    }

    fn bind_input_observer(
        input_translator: Rc<RefCell<Self>>,
        input_event_observer: EventObserver<InputEvent>,
    ) {
        let subscription = {
            let input_translator = input_translator.clone();
            input_event_observer.subscribe(move |event| {
                input_translator.borrow_mut().handle_input_event(event);
            })
        };

        input_translator.borrow_mut().input_subscription = Some(subscription);
    }

    /// Digit keys select from this palette; call after loading a mosaic that
    /// brought its own colors.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn held_key(&self) -> Option<&str> {
        self.held_key.as_deref()
    }

    fn handle_input_event(&mut self, event: &InputEvent) {
        trace!(target: "input_translator", "Input: {:?}", event);
        match event {
            InputEvent::KeyDown(key) => self.held_key = Some(key.clone()),
            InputEvent::KeyUp(key) => {
                self.held_key = None;
                self.handle_key_release(key);
            }
            InputEvent::Pointer {
                target: PointerTarget::Triangle { position, index },
                kind,
                modifiers,
            } => self.handle_triangle(*position, *index, *kind, *modifiers),
            InputEvent::Pointer {
                target: PointerTarget::Module(position),
                kind,
                modifiers,
            } => self.handle_module(*position, *kind, *modifiers),
        }
    }

    fn handle_key_release(&self, key: &str) {
        let Ok(number) = key.parse::<usize>() else {
            return;
        };
        if number == 0 {
            return;
        }
        if let Some(name) = self.palette.name_at(number - 1) {
            self.command_emitter
                .emit(MosaicCommand::SelectColor(name.to_string()));
        }
    }

    fn handle_triangle(
        &self,
        position: Position,
        index: usize,
        kind: PointerKind,
        modifiers: Modifiers,
    ) {
        // modifier clicks belong to the module underneath
        if modifiers.any() {
            return;
        }
        if matches!(
            kind,
            PointerKind::Click | PointerKind::Enter { buttons_down: true }
        ) {
            self.command_emitter
                .emit(MosaicCommand::PaintTriangle { position, index });
        }
    }

    fn handle_module(&self, position: Position, kind: PointerKind, modifiers: Modifiers) {
        if kind == (PointerKind::Enter { buttons_down: true }) {
            return;
        }

        let held_key = self.held_key.as_deref().unwrap_or_default();
        if SW_KEYS.contains(&held_key) {
            self.emit_edit(position, ModuleEdit::SetOrientation(Orientation::Sw));
            return;
        }
        if NW_KEYS.contains(&held_key) {
            self.emit_edit(position, ModuleEdit::SetOrientation(Orientation::Nw));
            return;
        }

        if modifiers.alt {
            self.emit_edit(position, ModuleEdit::ToggleOrientation);
        }
        if modifiers.shift {
            self.emit_edit(position, ModuleEdit::FlipColorOrder);
        }
    }

    fn emit_edit(&self, position: Position, edit: ModuleEdit) {
        self.command_emitter
            .emit(MosaicCommand::EditModule(position, edit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;

    struct Harness {
        inputs: EventEmitter<InputEvent>,
        translator: Rc<RefCell<InputTranslator>>,
        commands: Rc<RefCell<Vec<MosaicCommand>>>,
        command_emitter: EventEmitter<MosaicCommand>,
    }

    impl Harness {
        fn new() -> Self {
            let (command_emitter, command_observer) = Channel::<MosaicCommand>::new();
            let (inputs, input_observer) = Channel::<InputEvent>::new();
            let commands = Rc::new(RefCell::new(Vec::new()));
            let sink = commands.clone();
            // kept alive by the channel
            let _ = command_observer
                .subscribe(move |command| sink.borrow_mut().push(command.clone()));
            let translator =
                InputTranslator::new(command_emitter.clone(), input_observer, &Settings::default());
            Self {
                inputs,
                translator,
                commands,
                command_emitter,
            }
        }

        fn pointer(&self, target: PointerTarget, kind: PointerKind, shift: bool, alt: bool) {
            self.inputs.emit(InputEvent::Pointer {
                target,
                kind,
                modifiers: Modifiers { shift, alt },
            });
        }

        fn taken(&self) -> Vec<MosaicCommand> {
            self.commands.borrow_mut().drain(..).collect()
        }
    }

    fn triangle(index: usize) -> PointerTarget {
        PointerTarget::Triangle {
            position: Position::new(1, 2),
            index,
        }
    }

    fn module() -> PointerTarget {
        PointerTarget::Module(Position::new(1, 2))
    }

    fn is_edit(command: &MosaicCommand, expected: ModuleEdit) -> bool {
        matches!(command, MosaicCommand::EditModule(position, edit)
            if *position == Position::new(1, 2) && *edit == expected)
    }

    #[test]
    fn test_click_paints_triangle() {
        let harness = Harness::new();
        harness.pointer(triangle(1), PointerKind::Click, false, false);
        harness.pointer(triangle(0), PointerKind::Enter { buttons_down: true }, false, false);
        harness.pointer(triangle(0), PointerKind::Enter { buttons_down: false }, false, false);

        let commands = harness.taken();
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            MosaicCommand::PaintTriangle { index: 1, .. }
        ));
        assert!(matches!(
            commands[1],
            MosaicCommand::PaintTriangle { index: 0, .. }
        ));
    }

    #[test]
    fn test_modifiers_skip_triangle_paint() {
        let harness = Harness::new();
        harness.pointer(triangle(0), PointerKind::Click, true, false);
        harness.pointer(triangle(0), PointerKind::Click, false, true);
        assert!(harness.taken().is_empty());
    }

    #[test]
    fn test_module_modifiers() {
        let harness = Harness::new();
        harness.pointer(module(), PointerKind::Click, true, true);

        let commands = harness.taken();
        assert_eq!(commands.len(), 2);
        assert!(is_edit(&commands[0], ModuleEdit::ToggleOrientation));
        assert!(is_edit(&commands[1], ModuleEdit::FlipColorOrder));
    }

    #[test]
    fn test_drag_over_module_is_ignored() {
        let harness = Harness::new();
        harness.pointer(module(), PointerKind::Enter { buttons_down: true }, true, true);
        assert!(harness.taken().is_empty());
    }

    #[test]
    fn test_held_key_sets_orientation() {
        let harness = Harness::new();
        harness.inputs.emit(InputEvent::KeyDown("z".to_string()));
        harness.pointer(module(), PointerKind::Enter { buttons_down: false }, false, true);
        harness.inputs.emit(InputEvent::KeyUp("z".to_string()));

        harness.inputs.emit(InputEvent::KeyDown("q".to_string()));
        harness.pointer(module(), PointerKind::Click, false, false);
        harness.inputs.emit(InputEvent::KeyUp("q".to_string()));

        let commands = harness.taken();
        assert_eq!(commands.len(), 2);
        // the held key wins over alt
        assert!(is_edit(&commands[0], ModuleEdit::SetOrientation(Orientation::Sw)));
        assert!(is_edit(&commands[1], ModuleEdit::SetOrientation(Orientation::Nw)));
        assert_eq!(harness.translator.borrow().held_key(), None);
    }

    #[test]
    fn test_digit_release_selects_color() {
        let harness = Harness::new();
        harness.inputs.emit(InputEvent::KeyUp("2".to_string()));
        harness.inputs.emit(InputEvent::KeyUp("0".to_string()));
        harness.inputs.emit(InputEvent::KeyUp("9".to_string()));

        let commands = harness.taken();
        assert_eq!(commands.len(), 1);
        assert!(matches!(&commands[0], MosaicCommand::SelectColor(name) if name == "ember"));

        harness
            .translator
            .borrow_mut()
            .set_palette(Palette::cubes());
        harness.inputs.emit(InputEvent::KeyUp("5".to_string()));
        assert!(matches!(&harness.taken()[0], MosaicCommand::SelectColor(name) if name == "koi"));
    }

    #[test]
    fn test_destroy_detaches() {
        let harness = Harness::new();
        harness.translator.borrow_mut().destroy();
        harness.pointer(triangle(0), PointerKind::Click, false, false);
        assert!(harness.taken().is_empty());
        assert_eq!(harness.command_emitter.listener_count(), 1);
    }
}
