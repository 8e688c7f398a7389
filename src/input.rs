#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
}

/// Gehaltene Tasten dieses Frames (bleiben true solange gedrückt).
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyState {
    pub move_fwd: bool,
    pub move_left: bool,
    pub move_back: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl KeyState {
    pub fn is_down(&self, key: Key) -> bool {
        match key {
            Key::W => self.move_fwd,
            Key::A => self.move_left,
            Key::S => self.move_back,
            Key::D => self.move_right,
            Key::Space => self.jump,
        }
    }

    pub fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::W => self.move_fwd = down,
            Key::A => self.move_left = down,
            Key::S => self.move_back = down,
            Key::D => self.move_right = down,
            Key::Space => self.jump = down,
        }
    }

    #[cfg(test)]
    pub fn with(mut self, key: Key) -> Self {
        self.set(key, true);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

/// Mausbewegung, über einen Frame aufsummiert.
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseDelta {
    pub dx: f32,
    pub dy: f32,
}

impl MouseDelta {
    pub fn accumulate(&mut self, dx: f32, dy: f32) {
        self.dx += dx;
        self.dy += dy;
    }

    /// Liefert die Summe und setzt zurück.
    pub fn take(&mut self) -> (f32, f32) {
        let d = (self.dx, self.dy);
        *self = Self::default();
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_query_by_key() {
        let mut keys = KeyState::default();
        assert!(!keys.is_down(Key::W));
        keys.set(Key::W, true);
        keys.set(Key::Space, true);
        assert!(keys.is_down(Key::W));
        assert!(keys.is_down(Key::Space));
        keys.set(Key::W, false);
        assert!(!keys.is_down(Key::W));

        let keys = KeyState::default().with(Key::A).with(Key::D);
        assert!(keys.move_left && keys.move_right);
    }

    #[test]
    fn mouse_delta_take_resets() {
        let mut m = MouseDelta::default();
        m.accumulate(3.0, -1.0);
        m.accumulate(2.0, 4.0);
        assert_eq!(m.take(), (5.0, 3.0));
        assert_eq!(m.take(), (0.0, 0.0));
    }
}
