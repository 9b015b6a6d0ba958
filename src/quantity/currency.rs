use crate::quantity::time::Hours;

quantity!(
    /// Amount of money in the only supported currency.
    Euros, suffix: "€", precision: 2
);

quantity!(
    /// Hourly wage.
    EurosPerHour, suffix: "€/h", precision: 2
);

implement_mul!(Hours, EurosPerHour, Euros);

impl Euros {
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}
