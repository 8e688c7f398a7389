use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalColor {
    Blue,
    Orange,
}

impl PortalColor {
    pub fn rgb(self) -> [f32; 3] {
        match self {
            PortalColor::Blue => [0.15, 0.45, 1.0],
            PortalColor::Orange => [1.0, 0.55, 0.1],
        }
    }
}

/// Blickrichtung eines Portals = Außennormale der Wandseite, auf der es sitzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalDirection {
    Front,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl PortalDirection {
    pub fn normal(self) -> Vec3 {
        match self {
            PortalDirection::Front => Vec3::NEG_Z,
            PortalDirection::Back => Vec3::Z,
            PortalDirection::Left => Vec3::NEG_X,
            PortalDirection::Right => Vec3::X,
            PortalDirection::Up => Vec3::Y,
            PortalDirection::Down => Vec3::NEG_Y,
        }
    }
}

/// Portal opening size (width, height) in world units.
pub const PORTAL_SIZE: (f32, f32) = (1.0, 2.0);

#[derive(Debug, Clone)]
pub struct Portal {
    pub color: PortalColor,
    pub active: bool,
    pub position: Vec3,
    pub direction: PortalDirection,

    // Template relativ zum Spieler (wird im Konstruktor gesetzt)
    pub offset: Vec3,
    pub offset_direction: PortalDirection,
}

impl Portal {
    pub fn new(color: PortalColor) -> Self {
        Self {
            color,
            active: false,
            position: Vec3::ZERO,
            direction: PortalDirection::Front,
            offset: Vec3::ZERO,
            offset_direction: PortalDirection::Front,
        }
    }

    pub fn set(&mut self, offset: Vec3, direction: PortalDirection) {
        self.offset = offset;
        self.offset_direction = direction;
    }

    /// Overwrites the pose and activates the portal.
    pub fn place(&mut self, position: Vec3, direction: PortalDirection) {
        self.position = position;
        self.direction = direction;
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn normal(&self) -> Vec3 {
        self.direction.normal()
    }
}
