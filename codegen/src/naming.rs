//! Identifier naming shared by class names, field names and related-class names.

/// Splits `input` on `_` and joins the segments, each starting with an uppercase character.
///
/// The tail of a segment is lowercased unless the segment is already mixed-case, in which case
/// it is kept as written. With `capitalize_first` unset, the first segment is lowercased in full.
/// Empty segments contribute nothing. An empty input is returned unchanged.
pub fn transform_identifier(input: &str, capitalize_first: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut first = true;
    for segment in input.split('_').filter(|s| !s.is_empty()) {
        if first && !capitalize_first {
            out.push_str(&segment.to_lowercase());
        } else {
            let mut chars = segment.chars();
            if let Some(c) = chars.next() {
                out.extend(c.to_uppercase());
            }
            let tail = chars.as_str();
            if is_mixed_case(segment) {
                out.push_str(tail);
            } else {
                out.push_str(&tail.to_lowercase());
            }
        }
        first = false;
    }
    out
}

/// `order_item` -> `OrderItem`
pub fn class_name(table: &str) -> String {
    transform_identifier(table, true)
}

/// `order_id` -> `orderId`
pub fn field_name(column: &str) -> String {
    transform_identifier(column, false)
}

/// `orderId` -> `OrderId`, for `getOrderId` / `setOrderId`.
pub fn accessor_suffix(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_mixed_case(s: &str) -> bool {
    s.chars().any(char::is_lowercase) && s.chars().any(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_identifier() {
        assert_eq!(transform_identifier("user_account", true), "UserAccount");
        assert_eq!(transform_identifier("user_account", false), "userAccount");
        assert_eq!(transform_identifier("", true), "");
        assert_eq!(transform_identifier("", false), "");
        assert_eq!(transform_identifier("orders", true), "Orders");
        assert_eq!(transform_identifier("ORDER_ITEM", true), "OrderItem");
        assert_eq!(transform_identifier("ORDER_ITEM", false), "orderItem");
        assert_eq!(transform_identifier("id", false), "id");
        assert_eq!(transform_identifier("ID", false), "id");
    }

    #[test]
    fn test_first_segment_is_lowercased_in_full() {
        assert_eq!(transform_identifier("userAccount", false), "useraccount");
        assert_eq!(transform_identifier("Created_At", false), "createdAt");
    }

    #[test]
    fn test_mixed_case_tail_is_kept() {
        assert_eq!(transform_identifier("userAccount", true), "UserAccount");
        assert_eq!(transform_identifier("OrderItem", true), "OrderItem");
        assert_eq!(transform_identifier("line_itemNo", true), "LineItemNo");
        assert_eq!(transform_identifier("order_ITEM", true), "OrderItem");
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        assert_eq!(transform_identifier("_private_key", false), "privateKey");
        assert_eq!(transform_identifier("line__no_", true), "LineNo");
        assert_eq!(transform_identifier("___", true), "");
    }

    #[test]
    fn test_reapplication_is_stable() {
        for s in ["user_account", "orders", "order_item", "ORDER_ITEM", "x", "address_line_2", "id"] {
            let once = transform_identifier(s, true);
            assert!(!once.contains('_'));
            assert_eq!(transform_identifier(&once, true), once, "input {s}");
        }
    }

    #[test]
    fn test_accessor_suffix() {
        assert_eq!(accessor_suffix("orderId"), "OrderId");
        assert_eq!(accessor_suffix("qty"), "Qty");
        assert_eq!(accessor_suffix(""), "");
        assert_eq!(class_name("order_item"), "OrderItem");
        assert_eq!(field_name("order_id"), "orderId");
    }
}
