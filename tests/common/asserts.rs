use cors_engine::{CorsDecision, ParamValue, RejectionReason, ResponseParameters};

pub fn assert_preflight(decision: CorsDecision) -> ResponseParameters {
    match decision {
        CorsDecision::Preflight(params) => params,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_actual(decision: CorsDecision) -> ResponseParameters {
    match decision {
        CorsDecision::Actual(params) => params,
        other => panic!("expected actual decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: CorsDecision) -> RejectionReason {
    match decision {
        CorsDecision::Rejected(reason) => reason,
        other => panic!("expected rejection, got {:?}", other),
    }
}

pub fn param_str<'a>(params: &'a ResponseParameters, key: &str) -> Option<&'a str> {
    params.get(key).and_then(ParamValue::as_str)
}

pub fn param_list<'a>(params: &'a ResponseParameters, key: &str) -> Option<Vec<&'a str>> {
    params
        .get(key)
        .and_then(ParamValue::as_list)
        .map(|values| values.iter().map(String::as_str).collect())
}

pub fn assert_keys(params: &ResponseParameters, expected: &[&str]) {
    let keys: Vec<&str> = params.keys().collect();
    assert_eq!(keys, expected, "unexpected response parameter keys");
}
