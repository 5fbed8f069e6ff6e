use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Formas de URL de YouTube conocidas, en orden de prueba:
/// watch clásico, acortador, embed y el legado `/v/`.
///
/// Los patrones buscan la subcadena sin mirar el host, así que
/// `m.youtube.com`, `www.youtube.com` y el dominio pelado matchean
/// por igual.
static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
  vec![
    Regex::new(r"youtube\.com/watch\?v=([\w-]+)").unwrap(),
    Regex::new(r"youtu\.be/([\w-]+)").unwrap(),
    Regex::new(r"youtube\.com/embed/([\w-]+)").unwrap(),
    Regex::new(r"youtube\.com/v/([\w-]+)").unwrap(),
  ]
});

/// Hosts que habilitan el fallback por query string.
///
/// Ojo: la lista NO incluye `m.youtube.com`. Las URLs móviles se
/// resuelven igualmente vía los patrones (que ignoran el host), pero
/// el fallback está restringido al dominio canónico. Esta asimetría
/// es comportamiento contractual, no un descuido a "arreglar".
const FALLBACK_HOSTS: &[&str] = &["youtube.com", "www.youtube.com"];

/// Extrae el id de video de una URL de YouTube.
///
/// Prueba los patrones estructurales en orden y se queda con la
/// primera captura; si ninguno matchea, intenta leer el parámetro `v`
/// de la query string (solo en el dominio canónico). Entrada vacía,
/// malformada o de otro sitio => `None`. Nunca es un error: fallar en
/// parsear es un resultado válido.
///
/// Pura: sin I/O, sin estado, idempotente.
pub fn extract_video_id(url: &str) -> Option<String> {
  if url.is_empty() {
    return None;
  }

  for pattern in PATTERNS.iter() {
    if let Some(caps) = pattern.captures(url) {
      return Some(caps[1].to_string());
    }
  }

  // Fallback: ?v=... en cualquier posición de la query.
  let parsed = Url::parse(url).ok()?;
  let host = parsed.host_str()?;
  if !FALLBACK_HOSTS.contains(&host) {
    return None;
  }

  parsed.query_pairs().find(|(k, _)| k == "v").map(|(_, v)| v.into_owned())
}

/// Una URL es válida exactamente cuando se le puede extraer un id.
pub fn is_valid_youtube_url(url: &str) -> bool {
  extract_video_id(url).is_some()
}
