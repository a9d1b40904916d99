/// A point on the board. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position2D {
    pub x: f64,
    pub y: f64,
}

impl Position2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The cell containing this point. Negative coordinates map to 0.
    pub fn to_discrete(&self) -> DiscretePosition2D {
        DiscretePosition2D::new(self.x.round().max(0.0) as usize, self.y.round().max(0.0) as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscretePosition2D {
    pub x: usize,
    pub y: usize,
}

impl DiscretePosition2D {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn to_continuous(&self) -> Position2D {
        Position2D::new(self.x as f64, self.y as f64)
    }
}

/// Cells per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity2D {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity2D {
    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Something a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up(Side),
    Down(Side),
    Restart,
    Quit,
}

/// Goals per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn add_goal(&mut self, side: Side) -> u32 {
        let goals = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *goals += 1;
        *goals
    }
}
