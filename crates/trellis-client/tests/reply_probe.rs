use trellis_client::{ClientError, Reply};

#[test]
fn probe_returns_carried_error_by_reference() {
    let reply = Reply::Error {
        error: ClientError::closing("client is closing"),
    };

    let probed = reply.as_error().expect("error element should probe as error");
    assert_eq!(probed, &ClientError::closing("client is closing"));

    // Same underlying value, not a copy.
    match &reply {
        Reply::Error { error } => assert!(std::ptr::eq(probed, error)),
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn probe_reports_absent_for_success_payloads() {
    assert!(Reply::Nil.as_error().is_none());
    assert!(Reply::Ok.as_error().is_none());
    assert!(Reply::Int { value: 7 }.as_error().is_none());
    assert!(
        Reply::Text {
            value: "payload".to_string()
        }
        .as_error()
        .is_none()
    );
    assert!(Reply::Array { items: Vec::new() }.as_error().is_none());
}

#[test]
fn probe_separates_errors_in_a_mixed_result_scan() {
    let replies = vec![
        Reply::Ok,
        Reply::Error {
            error: ClientError::from_signal(2, "operation timed out"),
        },
        Reply::Int { value: 3 },
        Reply::Error {
            error: ClientError::generic("wrong type"),
        },
    ];

    let failures: Vec<&ClientError> = replies.iter().filter_map(Reply::as_error).collect();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].message(), "operation timed out");
    assert_eq!(failures[1].message(), "wrong type");

    assert_eq!(replies.iter().filter(|reply| reply.is_error()).count(), 2);
}
