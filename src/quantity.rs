#[macro_use]
mod macros;

pub mod currency;
pub mod percent;
pub mod time;

#[cfg(test)]
mod tests {
    use crate::quantity::currency::Euros;

    #[test]
    fn test_min() {
        assert_eq!(Euros(1.0).min(Euros(2.0)), Euros(1.0));
        assert_eq!(Euros(2.0).min(Euros(1.0)), Euros(1.0));
    }

    #[test]
    fn test_max() {
        assert_eq!(Euros(1.0).max(Euros(2.0)), Euros(2.0));
        assert_eq!(Euros(2.0).max(Euros(1.0)), Euros(2.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Euros(1.0).clamp(Euros(2.0), Euros(3.0)), Euros(2.0));
        assert_eq!(Euros(4.0).clamp(Euros(2.0), Euros(3.0)), Euros(3.0));
        assert_eq!(Euros(2.0).clamp(Euros(1.0), Euros(3.0)), Euros(2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Euros(-2000.0).to_string(), "-2000.00 €");
        assert_eq!(format!("{:?}", Euros(400.0)), "400.0€");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("12.5".parse::<Euros>().unwrap(), Euros(12.5));
        assert!("twelve".parse::<Euros>().is_err());
    }
}
