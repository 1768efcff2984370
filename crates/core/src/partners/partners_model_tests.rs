//! Tests for the partner aggregate and its limit rules.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::partners::{Partner, PartnerPromoCodeLimit, SetPartnerPromoCodeLimitRequest};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn partner_with_active_limit() -> Partner {
        let mut partner = Partner::new("Рыба твоей мечты");
        partner.number_issued_promo_codes = 7;
        partner.partner_limits.push(PartnerPromoCodeLimit::new(
            partner.id,
            50,
            now() - Duration::days(30),
            now() + Duration::days(30),
        ));
        partner
    }

    // ==================== set_promo_code_limit ====================

    #[test]
    fn test_set_limit_replaces_active_limit() {
        let mut partner = partner_with_active_limit();
        let old_id = partner.partner_limits[0].id;

        let created = partner
            .set_promo_code_limit(10, now() + Duration::days(1), now())
            .unwrap();

        assert_eq!(partner.partner_limits.len(), 2);
        assert_eq!(partner.find_limit(old_id).unwrap().cancel_date, Some(now()));
        assert_eq!(partner.active_limit(), Some(&created));
        assert_eq!(created.create_date, now());
        assert_eq!(created.partner_id, partner.id);
        assert_eq!(partner.number_issued_promo_codes, 0);
    }

    #[test]
    fn test_set_limit_leaves_cancelled_history_untouched() {
        let mut partner = partner_with_active_limit();
        let earlier = now() - Duration::days(10);
        partner.cancel_active_limit(earlier);

        partner
            .set_promo_code_limit(5, now() + Duration::days(1), now())
            .unwrap();

        assert_eq!(partner.partner_limits[0].cancel_date, Some(earlier));
        assert!(partner.partner_limits[1].is_active());
    }

    #[test]
    fn test_set_limit_inactive_partner_is_not_mutated() {
        let mut partner = partner_with_active_limit();
        partner.is_active = false;
        let before = partner.clone();

        let result = partner.set_promo_code_limit(10, now() + Duration::days(1), now());

        assert!(matches!(result, Err(Error::InvalidOperation(_))));
        assert_eq!(partner, before);
    }

    #[test]
    fn test_set_limit_non_positive_cancels_and_resets_before_rejecting() {
        let mut partner = partner_with_active_limit();

        let result = partner.set_promo_code_limit(0, now() + Duration::days(1), now());

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(partner.partner_limits.len(), 1);
        assert_eq!(partner.partner_limits[0].cancel_date, Some(now()));
        assert_eq!(partner.number_issued_promo_codes, 0);
        assert!(partner.active_limit().is_none());
    }

    // ==================== cancel_active_limit ====================

    #[test]
    fn test_cancel_active_limit_without_limits_is_noop() {
        let mut partner = Partner::new("Каждому кота");

        assert_eq!(partner.cancel_active_limit(now()), None);
        assert!(partner.partner_limits.is_empty());
    }

    #[test]
    fn test_cancel_active_limit_returns_cancelled_id() {
        let mut partner = partner_with_active_limit();
        let id = partner.partner_limits[0].id;

        assert_eq!(partner.cancel_active_limit(now()), Some(id));
        assert_eq!(partner.cancel_active_limit(now()), None);
    }

    // ==================== Serialization ====================

    #[test]
    fn test_partner_serializes_camel_case() {
        let partner = partner_with_active_limit();
        let json = serde_json::to_value(&partner).unwrap();

        assert_eq!(json["isActive"], true);
        assert_eq!(json["numberIssuedPromoCodes"], 7);
        assert_eq!(json["partnerLimits"][0]["limit"], 50);
        assert!(json["partnerLimits"][0]["cancelDate"].is_null());
    }

    #[test]
    fn test_limit_request_deserializes_camel_case() {
        let request: SetPartnerPromoCodeLimitRequest =
            serde_json::from_str(r#"{"endDate":"2024-03-02T12:00:00Z","limit":10}"#).unwrap();

        assert_eq!(request.limit, 10);
        assert_eq!(request.end_date, now() + Duration::days(1));
    }
}
