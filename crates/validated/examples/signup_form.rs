//! Validates a sign-up form and prints every problem found.
//!
//! Logs at trace level so the validator spans and rejections are visible:
//!
//! ```text
//! cargo run -p nebula-validated --example signup_form
//! ```

use nebula_validated::prelude::*;

#[derive(Debug, Clone, Default)]
struct RawSignup {
    username: Option<String>,
    email: Option<String>,
    age: Option<String>,
    plan: Option<String>,
}

#[derive(Debug)]
struct Signup {
    username: String,
    email: String,
    age: u8,
    plan: String,
}

fn signup_validator() -> BoxValidator<RawSignup, Signup, Violation> {
    let username = from::<RawSignup, Violation>()
        .map(|raw| raw.username)
        .not_null_or_blank(|| Violation::required().with_field("username"))
        .trim()
        .min_len(3, |_| Violation::min_length(3).with_field("username"))
        .max_len(16, |_| Violation::max_length(16).with_field("username"))
        .traced("signup.username");

    let email = from::<RawSignup, Violation>()
        .map(|raw| raw.email)
        .not_null_or_blank(|| Violation::required().with_field("email"))
        .trim()
        .to_lowercase()
        .matches(r"[^@\s]+@[^@\s]+\.[^@\s]+", |_| {
            Violation::pattern_mismatch("name@domain.tld").with_field("email")
        })
        .expect("email pattern compiles")
        .traced("signup.email");

    let age = from::<RawSignup, Violation>()
        .map(|raw| raw.age)
        .not_null_or_blank(|| Violation::required().with_field("age"))
        .trim()
        .parse_as::<u8>(|s| Violation::unparsable(s, "age").with_field("age"))
        .in_range(13, 120, |n| Violation::out_of_range(n).with_field("age"))
        .traced("signup.age");

    let plan = from::<RawSignup, Violation>()
        .map(|raw| raw.plan)
        .null_or_not_blank(|| Violation::blank().with_field("plan"))
        .map(|plan| plan.map_or_else(|| "free".to_string(), |p| p.trim().to_lowercase()))
        .one_of(["free", "pro", "team"].map(String::from), |p| {
            Violation::not_one_of(p).with_field("plan")
        })
        .traced("signup.plan");

    zip4(username, email, age, plan)
        .map(|(username, email, age, plan)| Signup {
            username,
            email,
            age,
            plan,
        })
        .boxed()
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let validator = signup_validator();

    let forms = [
        RawSignup {
            username: Some("  ada_l ".into()),
            email: Some("Ada@Example.com".into()),
            age: Some("36".into()),
            plan: None,
        },
        RawSignup {
            username: Some("al".into()),
            email: Some("not-an-email".into()),
            age: Some("twelve".into()),
            plan: Some("gold".into()),
        },
        RawSignup::default(),
    ];

    for form in forms {
        match validator.parse(form.clone()) {
            Validated::Valid(signup) => println!("✓ accepted {signup:?}"),
            Validated::Invalid(errors) => {
                println!("✗ rejected {form:?}");
                for violation in &errors {
                    println!("    - {violation}");
                }
            }
        }
    }
}
