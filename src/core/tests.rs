#[cfg(test)]
mod tests {
    use crate::core::{
        SubmitOutcome, WAITLIST_ERROR_MESSAGE, WAITLIST_SUCCESS_MESSAGE, WaitlistDraft,
        is_valid_email,
    };

    #[test]
    fn test_addresses_without_at_always_reject() {
        for address in ["", "plain", "no-at.here", "spaced words", "dots.only.net"] {
            assert!(!is_valid_email(address), "expected rejection: {address:?}");
        }
    }

    #[test]
    fn test_user_domain_tld_shapes_accept() {
        for address in [
            "dev@example.com",
            "first.last@example.org",
            "a@b.c",
            "user+tag@mail.example.co.uk",
        ] {
            assert!(is_valid_email(address), "expected acceptance: {address:?}");
        }
    }

    // Full editing session the way the form drives the draft: a typo, a
    // rejection, a correction, an acceptance, then further typing.
    #[test]
    fn test_full_editing_session() {
        let mut draft = WaitlistDraft::new();

        // typing
        for partial in ["d", "de", "dev", "dev@", "dev@exam"] {
            draft.set_email(partial);
            assert!(draft.message.is_none());
            assert!(!draft.submitted);
        }

        // premature submit is rejected and keeps the typed value
        assert_eq!(draft.submit(), SubmitOutcome::Rejected);
        assert_eq!(draft.email, "dev@exam");
        assert_eq!(draft.message.as_deref(), Some(WAITLIST_ERROR_MESSAGE));

        // the error message survives further typing
        draft.set_email("dev@example.com");
        assert_eq!(draft.message.as_deref(), Some(WAITLIST_ERROR_MESSAGE));

        // corrected address is accepted and the field clears
        assert_eq!(draft.submit(), SubmitOutcome::Accepted);
        assert!(draft.submitted);
        assert!(draft.email.is_empty());
        assert_eq!(draft.message.as_deref(), Some(WAITLIST_SUCCESS_MESSAGE));

        // typing again returns to editing without touching the message
        draft.set_email("another");
        assert!(draft.submitted);
        assert_eq!(draft.message.as_deref(), Some(WAITLIST_SUCCESS_MESSAGE));
    }

    #[test]
    fn test_submit_is_idempotent_per_state() {
        let mut draft = WaitlistDraft::new();
        draft.set_email("broken");

        draft.submit();
        let after_first = draft.clone();
        draft.submit();

        assert_eq!(draft, after_first);
    }
}
