//! Email helpers for privacy-safe logging.

/// Masks an email address for logging
///
/// Shows only the first character of the local part and the full domain.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let mut chars = local.chars();
            // split_once on a non-empty local part always yields a first char
            let first = chars.next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
