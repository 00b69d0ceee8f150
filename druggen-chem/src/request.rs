//! Discovery requests as collected by the input form.

use std::fmt;
use std::str::FromStr;

use druggen_core::{DruggenError, Result};

macro_rules! form_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($value:tt, $label:tt)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $value))]
                $variant,
            )+
        }

        impl $name {
            /// All variants in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Form value.
            pub fn value(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Display label.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = DruggenError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    other => Err(DruggenError::InvalidArgument(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

form_enum! {
    /// Property the user would like candidates to have. Display only.
    DesiredProperty {
        LowToxicity => ("low_toxicity", "Low Toxicity"),
        HighBioavailability => ("high_bioavailability", "High Oral Bioavailability"),
        BbbCrossing => ("bbb_crossing", "Blood-Brain Barrier Crossing"),
        GoodSolubility => ("good_solubility", "Good Solubility"),
        MetabolicStability => ("metabolic_stability", "Metabolic Stability"),
    }
}

form_enum! {
    /// Intended route of administration.
    AdministrationRoute {
        Oral => ("oral", "Oral"),
        Intravenous => ("iv", "Intravenous"),
        Inhaled => ("inhaled", "Inhaled"),
        Patch => ("patch", "Transdermal Patch"),
    }
}

form_enum! {
    /// Requested batch size.
    BatchSize {
        Small => ("small", "Small (5 molecules)"),
        Medium => ("medium", "Medium (10 molecules)"),
        Large => ("large", "Large (20 molecules)"),
    }
}

impl BatchSize {
    /// Number of candidates generated for this batch size.
    pub fn count(&self) -> usize {
        match self {
            Self::Small => 5,
            Self::Medium => 10,
            Self::Large => 20,
        }
    }
}

/// A submitted discovery request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiscoveryRequest {
    pub disease_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub drug_properties: Vec<DesiredProperty>,
    pub administration_route: AdministrationRoute,
    pub batch_size: BatchSize,
}

impl DiscoveryRequest {
    /// Build a request from raw form values.
    ///
    /// # Errors
    ///
    /// Returns [`DruggenError::InvalidArgument`] for an unknown form value or
    /// a blank disease name.
    pub fn from_form(
        disease_name: &str,
        drug_properties: &[&str],
        administration_route: &str,
        batch_size: &str,
    ) -> Result<Self> {
        let request = Self {
            disease_name: disease_name.to_string(),
            drug_properties: drug_properties
                .iter()
                .map(|p| p.parse())
                .collect::<Result<Vec<_>>>()?,
            administration_route: administration_route.parse()?,
            batch_size: batch_size.parse()?,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check that the disease name is present.
    pub fn validate(&self) -> Result<()> {
        if self.disease_name.trim().is_empty() {
            return Err(DruggenError::InvalidArgument(
                "disease name is required".into(),
            ));
        }
        Ok(())
    }
}
