//! Helpers for keeping personal data out of logs.

/// Mask the local part of an email address: `kok202@example.com` → `k***@example.com`.
pub(crate) fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn masks_local_part() {
        assert_eq!(mask_email("kok202@example.com"), "k***@example.com");
        assert_eq!(mask_email("k@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
