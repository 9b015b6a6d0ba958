quantity!(Hours, suffix: "h", precision: 2);

quantity!(
    /// Hours per working day.
    HoursPerDay, suffix: "h/d", precision: 2
);

quantity!(Days, suffix: "d", precision: 1);

implement_mul!(HoursPerDay, Days, Hours);
