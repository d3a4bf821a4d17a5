use flagpack::{
    format_debug, format_hex, format_json, pack_flags, unpack_flags, CodeError,
    HttpErrno, HttpMethod, PackedFlags, ParserState, Version,
};

// =========================================================================
// Packing
// =========================================================================

#[test]
fn ok_get_response() {
    let state = ParserState {
        status_code: 200,
        method: 1, // GET
        http_errno: 0,
        upgrade: false,
    };
    assert_eq!(pack_flags(&state), 0x0001_0200);
}

#[test]
fn upgrade_only() {
    let state = ParserState {
        status_code: 0,
        method: 0,
        http_errno: 0,
        upgrade: true,
    };
    assert_eq!(pack_flags(&state), 0x8000_0000);
}

#[test]
fn each_field_lands_in_its_slot() {
    let cases = [
        (ParserState { status_code: 0xFFFF, ..Default::default() }, 0x0000_FFFF),
        (ParserState { method: 0xFF, ..Default::default() }, 0x00FF_0000),
        (ParserState { http_errno: 0x7F, ..Default::default() }, 0x7F00_0000),
        (ParserState { upgrade: true, ..Default::default() }, 0x8000_0000),
    ];
    for (state, expected) in cases {
        assert_eq!(
            pack_flags(&state),
            expected,
            "mismatch for state {state:?}"
        );
    }
}

#[test]
fn all_fields_combined() {
    let state = ParserState {
        status_code: 101,
        method: 1,  // GET
        http_errno: 30, // HPE_PAUSED
        upgrade: true,
    };
    let packed = pack_flags(&state);
    assert_eq!(packed, 0x8000_0000 | (30 << 24) | (1 << 16) | 101);

    let flags = unpack_flags(packed);
    assert_eq!(flags.status_code(), 101);
    assert_eq!(flags.method_code(), 1);
    assert_eq!(flags.errno_code(), 30);
    assert!(flags.upgrade());
}

#[test]
fn default_state_packs_to_zero() {
    assert_eq!(pack_flags(&ParserState::default()), 0);
}

#[test]
fn field_roundtrip_for_in_range_inputs() {
    for status_code in [0u32, 1, 200, 404, 599, 0xFFFF] {
        for method in [0u32, 1, 16, 32, 0xFF] {
            for http_errno in [0u32, 1, 16, 31, 0x7F] {
                for upgrade in [false, true] {
                    let state = ParserState { status_code, method, http_errno, upgrade };
                    let flags = PackedFlags::pack(&state);
                    assert_eq!(u32::from(flags.status_code()), status_code);
                    assert_eq!(u32::from(flags.method_code()), method);
                    assert_eq!(u32::from(flags.errno_code()), http_errno);
                    assert_eq!(flags.upgrade(), upgrade);
                    assert_eq!(flags.unpack(), state);
                }
            }
        }
    }
}

// =========================================================================
// Purity and idempotence
// =========================================================================

#[test]
fn packing_twice_yields_identical_results() {
    let state = ParserState {
        status_code: 418,
        method: 3, // POST
        http_errno: 12,
        upgrade: false,
    };
    assert_eq!(pack_flags(&state), pack_flags(&state));
}

#[test]
fn packing_does_not_mutate_the_state() {
    let state = ParserState {
        status_code: 301,
        method: 2, // HEAD
        http_errno: 5,
        upgrade: true,
    };
    let before = state;
    let _ = pack_flags(&state);
    assert_eq!(state, before);
    assert_eq!(state.status_code, 301);
    assert_eq!(state.method, 2);
    assert_eq!(state.http_errno, 5);
    assert!(state.upgrade);
}

// =========================================================================
// Overflow behavior (documented, not guarded against)
// =========================================================================

#[test]
fn method_overflow_bleeds_into_errno() {
    // 256 does not fit the 8-bit method slot: its low byte (0) lands in
    // bits 16-23 and its ninth bit lands on bit 24, errno's bit 0.
    let state = ParserState {
        status_code: 0,
        method: 256,
        http_errno: 0,
        upgrade: false,
    };
    let flags = unpack_flags(pack_flags(&state));
    assert_eq!(flags.method_code(), 0);
    assert_eq!(flags.errno_code(), 1);
}

#[test]
fn status_overflow_bleeds_into_method() {
    let state = ParserState {
        status_code: 0x1_0000,
        method: 0,
        http_errno: 0,
        upgrade: false,
    };
    let flags = unpack_flags(pack_flags(&state));
    assert_eq!(flags.status_code(), 0);
    assert_eq!(flags.method_code(), 1);
}

#[test]
fn errno_overflow_bleeds_into_upgrade() {
    let state = ParserState {
        status_code: 0,
        method: 0,
        http_errno: 0x80,
        upgrade: false,
    };
    let flags = unpack_flags(pack_flags(&state));
    assert_eq!(flags.errno_code(), 0);
    assert!(flags.upgrade());
}

#[test]
fn overflow_bits_or_into_fields_already_set() {
    // method=256 sets bit 24; errno=1 sets it too. OR-combination means
    // the collision is silent, not additive.
    let state = ParserState {
        status_code: 0,
        method: 256,
        http_errno: 1,
        upgrade: false,
    };
    assert_eq!(pack_flags(&state), 1 << 24);
}

// =========================================================================
// Typed field resolution
// =========================================================================

#[test]
fn known_method_codes_resolve() {
    let flags = PackedFlags::new(1 << 16);
    assert_eq!(flags.method().unwrap(), HttpMethod::GET);

    let flags = PackedFlags::new(24 << 16);
    assert_eq!(flags.method().unwrap(), HttpMethod::MSEARCH);
}

#[test]
fn unknown_method_code_is_an_error() {
    let flags = PackedFlags::new(33 << 16);
    assert_eq!(flags.method(), Err(CodeError::UnknownMethod(33)));
}

#[test]
fn known_errno_codes_resolve() {
    let flags = PackedFlags::new(0);
    assert_eq!(flags.errno().unwrap(), HttpErrno::Ok);

    let flags = PackedFlags::new(12 << 24);
    assert_eq!(flags.errno().unwrap(), HttpErrno::HeaderOverflow);
}

#[test]
fn unknown_errno_code_is_an_error() {
    let flags = PackedFlags::new(99 << 24);
    assert_eq!(flags.errno(), Err(CodeError::UnknownErrno(99)));
}

#[test]
fn upgrade_bit_does_not_leak_into_errno() {
    // Bit 31 is masked out of the 7-bit errno slot.
    let flags = PackedFlags::new(0x8000_0000);
    assert_eq!(flags.errno_code(), 0);
    assert_eq!(flags.errno().unwrap(), HttpErrno::Ok);
    assert!(flags.upgrade());
}

// =========================================================================
// Method and errno tables
// =========================================================================

#[test]
fn method_codes_match_upstream_table() {
    assert_eq!(HttpMethod::DELETE.code(), 0);
    assert_eq!(HttpMethod::GET.code(), 1);
    assert_eq!(HttpMethod::MSEARCH.code(), 24);
    assert_eq!(HttpMethod::PATCH.code(), 28);
    assert_eq!(HttpMethod::UNLINK.code(), 32);
}

#[test]
fn method_code_roundtrip() {
    for method in HttpMethod::ALL {
        assert_eq!(
            HttpMethod::from_code(u32::from(method.code())).unwrap(),
            method
        );
    }
}

#[test]
fn method_name_roundtrip() {
    for method in HttpMethod::ALL {
        assert_eq!(
            HttpMethod::from_name(method.as_str())
                .unwrap_or_else(|e| panic!("method {method}: {e}")),
            method
        );
    }
}

#[test]
fn msearch_uses_its_wire_name() {
    assert_eq!(HttpMethod::MSEARCH.as_str(), "M-SEARCH");
    assert_eq!(HttpMethod::from_name("M-SEARCH").unwrap(), HttpMethod::MSEARCH);
    assert!(HttpMethod::from_name("MSEARCH").is_err());
}

#[test]
fn method_name_lookup_is_case_sensitive() {
    assert_eq!(
        HttpMethod::from_name("get"),
        Err(CodeError::UnknownMethodName("get".to_owned()))
    );
}

#[test]
fn errno_codes_fit_seven_bits() {
    for errno in HttpErrno::ALL {
        assert!(errno.code() < 0x80, "errno {} exceeds 7 bits", errno.name());
    }
}

#[test]
fn errno_code_roundtrip() {
    for errno in HttpErrno::ALL {
        assert_eq!(HttpErrno::from_code(u32::from(errno.code())).unwrap(), errno);
    }
}

#[test]
fn errno_names_and_descriptions() {
    assert_eq!(HttpErrno::Ok.name(), "HPE_OK");
    assert_eq!(HttpErrno::Ok.description(), "success");
    assert_eq!(HttpErrno::Paused.name(), "HPE_PAUSED");
    assert_eq!(HttpErrno::Paused.description(), "parser is paused");
    assert_eq!(HttpErrno::LfExpected.description(), "LF character expected");
}

// =========================================================================
// Version
// =========================================================================

#[test]
fn version_unpacks_from_packed_u32() {
    let v = Version::from_packed(0x0002_0500);
    assert_eq!(v, Version { major: 2, minor: 5, patch: 0 });
    assert_eq!(v.to_string(), "2.5.0");
}

#[test]
fn version_pack_roundtrip() {
    let v = Version { major: 2, minor: 5, patch: 0 };
    assert_eq!(Version::from_packed(v.to_packed()), v);
    assert_eq!(v.to_packed(), 0x0002_0500);
}

// =========================================================================
// Output formats
// =========================================================================

#[test]
fn hex_output_is_zero_padded() {
    let flags = PackedFlags::new(0x0001_0200);
    assert_eq!(format_hex(&flags), "0x00010200\n");
}

#[test]
fn json_output_breaks_down_fields() {
    let state = ParserState {
        status_code: 200,
        method: 1,
        http_errno: 0,
        upgrade: false,
    };
    let flags = PackedFlags::pack(&state);

    let json: serde_json::Value =
        serde_json::from_str(&format_json(&flags, false)).expect("valid JSON");
    assert_eq!(json["packed"], 0x0001_0200);
    assert_eq!(json["hex"], "0x00010200");
    assert_eq!(json["status_code"], 200);
    assert_eq!(json["method_code"], 1);
    assert_eq!(json["method"], "GET");
    assert_eq!(json["errno_code"], 0);
    assert_eq!(json["errno"], "HPE_OK");
    assert_eq!(json["upgrade"], false);
}

#[test]
fn json_output_uses_null_for_unknown_codes() {
    let flags = PackedFlags::new((99 << 24) | (200 << 16));
    let json: serde_json::Value =
        serde_json::from_str(&format_json(&flags, false)).expect("valid JSON");
    assert_eq!(json["method"], serde_json::Value::Null);
    assert_eq!(json["errno"], serde_json::Value::Null);
    assert_eq!(json["method_code"], 200);
    assert_eq!(json["errno_code"], 99);
}

#[test]
fn pretty_json_is_indented() {
    let flags = PackedFlags::new(0x8000_0000);
    let pretty = format_json(&flags, true);
    assert!(pretty.contains('\n'));

    let compact = format_json(&flags, false);
    let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
    assert_eq!(a, b);
}

#[test]
fn debug_output_names_each_field() {
    let state = ParserState {
        status_code: 101,
        method: 1,
        http_errno: 0,
        upgrade: true,
    };
    let out = format_debug(&PackedFlags::pack(&state));
    assert!(out.contains("Packed:  0x80010065"));
    assert!(out.contains("Status:  101"));
    assert!(out.contains("Method:  1 (GET)"));
    assert!(out.contains("Errno:   0 (HPE_OK: success)"));
    assert!(out.contains("Upgrade: yes"));
}

#[test]
fn debug_output_marks_unknown_codes() {
    let flags = PackedFlags::new((99 << 24) | (200 << 16));
    let out = format_debug(&flags);
    assert!(out.contains("Method:  200 (unknown)"));
    assert!(out.contains("Errno:   99 (unknown)"));
}
