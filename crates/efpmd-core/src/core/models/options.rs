use bitflags::bitflags;
use std::fmt;

/// An option value spelled by a fixed keyword in the input file.
///
/// `TOKENS` is matched by prefix in list order, so a name that is a textual
/// prefix of another must come after it.
pub trait Keyword: Copy + PartialEq + 'static {
    const TOKENS: &'static [(&'static str, Self)];

    fn keyword(self) -> &'static str {
        Self::TOKENS
            .iter()
            .find(|(_, value)| *value == self)
            .map_or("?", |(name, _)| *name)
    }
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Keyword for $name {
            const TOKENS: &'static [(&'static str, Self)] = &[
                $( ($token, Self::$variant), )+
            ];
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        }
    };
}

keyword_enum! {
    /// What the driver does with the system.
    pub enum RunType {
        SinglePoint => "sp",
        Gradient => "grad",
        Hessian => "hess",
        Optimize => "opt",
        MolecularDynamics => "md",
    }
}

keyword_enum! {
    /// How fragment position and orientation are written in a fragment block.
    pub enum CoordType {
        /// Three reference points, one per row.
        Points => "points",
        /// Center of mass followed by three Euler angles on a single row.
        XyzAbc => "xyzabc",
        /// Center of mass on the first row, then a row-major rotation matrix.
        RotMat => "rotmat",
    }
}

keyword_enum! {
    /// Length unit of fragment coordinates in the input file.
    pub enum Units {
        Bohr => "bohr",
        Angstrom => "angs",
    }
}

keyword_enum! {
    pub enum ElecDamp {
        Screen => "screen",
        Overlap => "overlap",
        Off => "off",
    }
}

keyword_enum! {
    pub enum DispDamp {
        TangToennies => "tt",
        Overlap => "overlap",
        Off => "off",
    }
}

keyword_enum! {
    pub enum PolDamp {
        TangToennies => "tt",
        Off => "off",
    }
}

keyword_enum! {
    /// Statistical ensemble sampled by molecular dynamics.
    pub enum Ensemble {
        /// Constant energy.
        Nve => "nve",
        /// Constant temperature, held by the thermostat.
        Nvt => "nvt",
    }
}

impl CoordType {
    /// Rows and values per row of a fragment geometry block.
    pub fn layout(self) -> (usize, usize) {
        match self {
            Self::XyzAbc => (1, 6),
            Self::Points => (3, 3),
            Self::RotMat => (4, 3),
        }
    }

    /// Number of geometry values a fragment block supplies.
    pub fn value_count(self) -> usize {
        let (rows, columns) = self.layout();
        rows * columns
    }

    /// Number of leading geometry values that are lengths.
    ///
    /// Euler angles and rotation matrix elements are dimensionless; only the
    /// center (or every reference point) follows the length unit.
    pub fn length_count(self) -> usize {
        match self {
            Self::XyzAbc | Self::RotMat => 3,
            Self::Points => 9,
        }
    }
}

bitflags! {
    /// Interaction terms enabled for the energy evaluation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Terms: u32 {
        /// Electrostatics.
        const ELEC = 1 << 0;
        /// Polarization.
        const POL = 1 << 1;
        /// Dispersion.
        const DISP = 1 << 2;
        /// Exchange repulsion.
        const XR = 1 << 3;
    }
}

impl fmt::Display for Terms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::ELEC, "elec"),
            (Self::POL, "pol"),
            (Self::DISP, "disp"),
            (Self::XR, "xr"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_shadowed_tokens<T: Keyword + fmt::Debug>() {
        let tokens = T::TOKENS;
        for (i, (earlier, _)) in tokens.iter().enumerate() {
            for (later, _) in &tokens[i + 1..] {
                assert!(
                    !later.starts_with(earlier),
                    "'{earlier}' is listed before '{later}' and would always match first"
                );
            }
        }
    }

    #[test]
    fn no_token_list_shadows_a_later_token() {
        assert_no_shadowed_tokens::<RunType>();
        assert_no_shadowed_tokens::<CoordType>();
        assert_no_shadowed_tokens::<Units>();
        assert_no_shadowed_tokens::<ElecDamp>();
        assert_no_shadowed_tokens::<DispDamp>();
        assert_no_shadowed_tokens::<PolDamp>();
        assert_no_shadowed_tokens::<Ensemble>();
    }

    #[test]
    fn display_prints_the_input_keyword() {
        assert_eq!(RunType::MolecularDynamics.to_string(), "md");
        assert_eq!(CoordType::XyzAbc.to_string(), "xyzabc");
        assert_eq!(Units::Angstrom.to_string(), "angs");
        assert_eq!(DispDamp::TangToennies.to_string(), "tt");
        assert_eq!(Ensemble::Nvt.to_string(), "nvt");
    }

    #[test]
    fn coord_type_layouts_match_block_shapes() {
        assert_eq!(CoordType::XyzAbc.layout(), (1, 6));
        assert_eq!(CoordType::Points.layout(), (3, 3));
        assert_eq!(CoordType::RotMat.layout(), (4, 3));
        assert_eq!(CoordType::XyzAbc.value_count(), 6);
        assert_eq!(CoordType::Points.value_count(), 9);
        assert_eq!(CoordType::RotMat.value_count(), 12);
    }

    #[test]
    fn only_translational_values_are_lengths() {
        assert_eq!(CoordType::XyzAbc.length_count(), 3);
        assert_eq!(CoordType::RotMat.length_count(), 3);
        assert_eq!(CoordType::Points.length_count(), 9);
    }

    #[test]
    fn terms_display_lists_enabled_terms_in_canonical_order() {
        assert_eq!(Terms::all().to_string(), "elec pol disp xr");
        assert_eq!((Terms::DISP | Terms::ELEC).to_string(), "elec disp");
        assert_eq!(Terms::empty().to_string(), "");
    }
}
