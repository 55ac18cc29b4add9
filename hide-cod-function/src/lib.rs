// Public modules so host shims and the admin tooling can use them
pub mod evaluator;
pub mod normalize;
pub mod types;

pub use evaluator::{evaluate, DEFAULT_COD_KEYWORDS};
pub use normalize::{for_matching as normalize_for_matching, parse_list_field};
pub use types::{
    CheckoutContext, FunctionRunResult, HideOperation, Operation, PaymentMethod, PolicyConfig,
    RunInput,
};

/// Run one checkout evaluation over an already-canonicalized input.
/// Pure and total: same input, same output, nothing raised, no I/O.
pub fn run(input: &RunInput) -> FunctionRunResult {
    evaluator::evaluate(&input.config, &input.context, &input.payment_methods)
}

/// --- JSON boundary for host shims ---
///
/// Only a syntactically unreadable document errors; structural surprises
/// (missing fields, wrong shapes) degrade to their empty values inside
/// [`RunInput::from_value`] and yield "no change".
pub fn run_function_json(input_json: &str) -> Result<FunctionRunResult, serde_json::Error> {
    let doc: serde_json::Value = serde_json::from_str(input_json)?;
    Ok(run(&RunInput::from_value(&doc)))
}

/// --- WASM entrypoint (only compiled for wasm32 with feature "wasm_guest") ---
#[cfg(all(target_arch = "wasm32", feature = "wasm_guest"))]
mod wasm_api {
    use wasm_bindgen::prelude::*;

    // The sandboxed host aborts checkout on a trap, so even an unreadable
    // input document degrades to the explicit no-change result here.
    #[wasm_bindgen]
    pub fn run_function(input_json: &str) -> String {
        match super::run_function_json(input_json) {
            Ok(res) => serde_json::to_string(&res)
                .unwrap_or_else(|_| r#"{"operations":[]}"#.to_string()),
            Err(_) => r#"{"operations":[]}"#.to_string(),
        }
    }
}
