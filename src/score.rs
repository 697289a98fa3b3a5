/// Displayed score, derived from the snake's body length every frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    value: u32,
    multiplier: u32,
}

impl Score {
    pub fn new(multiplier: u32) -> Self {
        Score { value: 0, multiplier }
    }

    pub fn update(&mut self, body_len: usize) {
        self.value = body_len as u32 * self.multiplier;
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Zero padded to six digits, like an arcade counter.
    pub fn display(&self) -> String {
        format!("{:06}", self.value)
    }
}
