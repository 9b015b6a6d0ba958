quantity!(Percent, suffix: "%", precision: 1);

impl Percent {
    pub const HUNDRED: Self = Self(100.0);
}
