/// What the player is asking the car to do this frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Turns faster and loosens grip so the car slides.
    pub handbrake: bool,
}

impl PlayerInput {
    /// No motion key is held. The handbrake alone does not count as motion.
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }

    /// 1 for forward, -1 for reverse, 0 for neither or both.
    pub fn throttle(&self) -> f32 {
        axis(self.backward, self.forward)
    }

    /// 1 for right, -1 for left, 0 for neither or both.
    pub fn steer(&self) -> f32 {
        axis(self.left, self.right)
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}
