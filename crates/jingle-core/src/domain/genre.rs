use serde::{Deserialize, Serialize};
use std::fmt;

/// Género musical de una canción del catálogo.
///
/// El conjunto es cerrado: cualquier valor fuera de la lista se trata
/// como [`Genre::Unknown`]. Se serializa con el nombre "de pantalla"
/// (`R&B`, `Hip-Hop`, ...) para que el JSON quede legible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
  Pop,
  Rock,
  Jazz,
  Country,
  #[serde(rename = "R&B")]
  RAndB,
  #[serde(rename = "Hip-Hop")]
  HipHop,
  Classical,
  #[default]
  Unknown,
}

impl Genre {
  /// Lista completa de géneros reales (sin `Unknown`), en el orden
  /// en que se muestran al usuario.
  pub const ALL: &[Genre] = &[
    Genre::Pop,
    Genre::Rock,
    Genre::Jazz,
    Genre::Country,
    Genre::RAndB,
    Genre::HipHop,
    Genre::Classical,
  ];

  /// Convierte una etiqueta de UI en un género. Nunca falla: lo que
  /// no se reconoce es `Unknown`.
  pub fn parse(label: &str) -> Genre {
    match label {
      "Pop" => Genre::Pop,
      "Rock" => Genre::Rock,
      "Jazz" => Genre::Jazz,
      "Country" => Genre::Country,
      "R&B" => Genre::RAndB,
      "Hip-Hop" => Genre::HipHop,
      "Classical" => Genre::Classical,
      _ => Genre::Unknown,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Genre::Pop => "Pop",
      Genre::Rock => "Rock",
      Genre::Jazz => "Jazz",
      Genre::Country => "Country",
      Genre::RAndB => "R&B",
      Genre::HipHop => "Hip-Hop",
      Genre::Classical => "Classical",
      Genre::Unknown => "Unknown",
    }
  }
}

impl fmt::Display for Genre {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_round_trips_display_labels() {
    for g in Genre::ALL {
      assert_eq!(Genre::parse(g.as_str()), *g);
    }
  }

  #[test]
  fn unrecognized_label_is_unknown() {
    assert_eq!(Genre::parse("Polka"), Genre::Unknown);
    assert_eq!(Genre::parse(""), Genre::Unknown);
  }
}
