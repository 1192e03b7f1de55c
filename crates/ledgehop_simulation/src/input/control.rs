//! ControlInput: snapshot команд за кадр

use bevy::prelude::*;

/// Логические команды, которые понимает симуляция
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Jump,
    Attack,
}

impl Control {
    pub const ALL: [Control; 4] = [Control::MoveLeft, Control::MoveRight, Control::Jump, Control::Attack];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Snapshot команд
///
/// Held state живёт между кадрами. Edges (`just_pressed` / `just_released`)
/// живут до `clear_edges`, который симуляция зовёт в конце каждого шага:
/// edge, записанный между двумя fixed step'ами, видит ровно один шаг.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ControlInput {
    held: [bool; 4],
    pressed: [bool; 4],
    released: [bool; 4],
}

impl ControlInput {
    /// Клавиша нажата (edge только если не была зажата)
    pub fn press(&mut self, control: Control) {
        let i = control.index();
        if !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = true;
    }

    /// Клавиша отпущена (edge только если была зажата)
    pub fn release(&mut self, control: Control) {
        let i = control.index();
        if self.held[i] {
            self.released[i] = true;
        }
        self.held[i] = false;
    }

    /// Опрошенное состояние "зажата": edges выводятся из предыдущего
    pub fn set(&mut self, control: Control, down: bool) {
        if down {
            self.press(control);
        } else {
            self.release(control);
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    pub fn just_pressed(&self, control: Control) -> bool {
        self.pressed[control.index()]
    }

    pub fn just_released(&self, control: Control) -> bool {
        self.released[control.index()]
    }

    /// Зажато хотя бы одно горизонтальное направление
    pub fn any_direction_held(&self) -> bool {
        self.is_held(Control::MoveLeft) || self.is_held(Control::MoveRight)
    }

    pub fn clear_edges(&mut self) {
        self.pressed = [false; 4];
        self.released = [false; 4];
    }
}

/// Система: сброс edges после того как шаг их прочитал
pub fn clear_input_edges(mut inputs: Query<&mut ControlInput>) {
    for mut input in inputs.iter_mut() {
        input.clear_edges();
    }
}
