//! Character classes and pool building.

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Special,
}

impl CharClass {
    /// Catalog order, also the default selection order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Special,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Numbers => "numbers",
            CharClass::Special => "special",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase (a-z)",
            CharClass::Uppercase => "Uppercase (A-Z)",
            CharClass::Numbers => "Numbers (0-9)",
            CharClass::Special => "Special (!@#...)",
        }
    }

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Concatenate the alphabets of `selected`, in the given order.
/// Unknown names contribute nothing; duplicates across classes are kept.
pub fn pool_for<S: AsRef<str>>(selected: &[S]) -> String {
    selected
        .iter()
        .filter_map(|name| CharClass::from_name(name.as_ref()))
        .map(CharClass::alphabet)
        .collect()
}

/// Number of characters `pool_for(selected)` would contain.
pub fn pool_size<S: AsRef<str>>(selected: &[S]) -> usize {
    selected
        .iter()
        .filter_map(|name| CharClass::from_name(name.as_ref()))
        .map(|c| c.alphabet().chars().count())
        .sum()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn pool_follows_selection_order() {
        assert_eq!(
            pool_for(&["numbers", "lowercase"]),
            format!("{NUMBERS}{LOWERCASE}")
        );
    }

    #[test]
    fn unknown_names_contribute_nothing() {
        assert_eq!(pool_for(&["nope", "special", ""]), SPECIAL);
        assert_eq!(pool_for::<&str>(&[]), "");
        assert_eq!(pool_size(&["nope"]), 0);
    }

    #[test]
    fn full_pool_size_is_74() {
        let names: Vec<&str> = CharClass::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(pool_size(&names), 26 + 26 + 10 + 12);
        assert_eq!(pool_for(&names).len(), 74);
    }

    #[test]
    fn names_round_trip() {
        for class in CharClass::ALL {
            assert_eq!(CharClass::from_name(class.name()), Some(class));
        }
    }

    proptest! {
        #[test]
        fn pool_is_the_ordered_concatenation(
            classes in proptest::sample::subsequence(CharClass::ALL.to_vec(), 0..=4)
                .prop_shuffle()
        ) {
            let names: Vec<&str> = classes.iter().map(|c| c.name()).collect();
            let expected: String = classes.iter().map(|c| c.alphabet()).collect();
            prop_assert_eq!(pool_for(&names), expected.clone());
            prop_assert_eq!(pool_for(&names), pool_for(&names));
            prop_assert_eq!(pool_size(&names), expected.chars().count());
        }
    }
}
