//! Expansion tests for the `Configurable` derive.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use super::expand;

fn expanded(input: &DeriveInput) -> Result<String> {
    expand(input)
        .map(|tokens| tokens.to_string())
        .map_err(|err| anyhow!("expansion failed: {err}"))
}

#[rstest]
fn generates_mutators_for_each_field() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Fetcher {
            base_path: String,
            retries: Option<i32>,
            headers: HashMap<String, String>,
            #[configurable(rename = "URL")]
            url: String,
            #[configurable(skip)]
            client: Client,
        }
    };
    let code = expanded(&input)?;
    ensure!(code.contains("impl :: paramwire :: Configurable for Fetcher"), "{code}");
    for mutator in ["\"setBasePath\"", "\"setRetries\"", "\"setHeaders\"", "\"setURL\""] {
        ensure!(code.contains(mutator), "missing {mutator} in {code}");
    }
    ensure!(!code.contains("setClient"), "skipped field leaked: {code}");
    ensure!(
        code.contains(":: core :: option :: Option :: Some (__paramwire_value)"),
        "optional field not wrapped: {code}"
    );
    ensure!(
        code.contains("__paramwire_value . into_iter () . collect ()"),
        "hash map not collected: {code}"
    );
    Ok(())
}

#[rstest]
fn honours_crate_override() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[configurable(crate = "wire")]
        struct Flag {
            enabled: bool,
        }
    };
    let code = expanded(&input)?;
    ensure!(code.contains("impl wire :: Configurable for Flag"), "{code}");
    ensure!(code.contains("wire :: ValueKind :: Bool"), "{code}");
    Ok(())
}

#[rstest]
fn empty_structs_accept_nothing() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Marker {}
    };
    let code = expanded(&input)?;
    ensure!(code.contains("false"), "{code}");
    ensure!(!code.contains("matches"), "{code}");
    Ok(())
}

#[rstest]
fn keeps_generics() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Holder<T: Send> where T: Sync {
            name: String,
            #[configurable(skip)]
            inner: T,
        }
    };
    let code = expanded(&input)?;
    ensure!(
        code.contains("impl < T : Send > :: paramwire :: Configurable for Holder < T > where T : Sync"),
        "{code}"
    );
    Ok(())
}

#[rstest]
#[case::tuple(parse_quote! { struct Pair(String, String); }, "requires named fields")]
#[case::enumeration(parse_quote! { enum Mode { A } }, "only be derived for structs")]
#[case::unsupported(parse_quote! { struct S { count: u8 } }, "unsupported field type")]
#[case::duplicate(
    parse_quote! { struct S { name: String, #[configurable(rename = "name")] other: String } },
    "duplicate mutator 'setName'"
)]
#[case::unknown_key(
    parse_quote! { struct S { #[configurable(default = 1)] name: String } },
    "unknown configurable attribute"
)]
#[case::empty_rename(
    parse_quote! { struct S { #[configurable(rename = "")] name: String } },
    "rename must not be empty"
)]
fn rejects_invalid_input(#[case] input: DeriveInput, #[case] message: &str) -> Result<()> {
    let Err(err) = expand(&input) else {
        return Err(anyhow!("expected expansion to fail"));
    };
    ensure!(err.to_string().contains(message), "unexpected error: {err}");
    Ok(())
}

#[rstest]
fn reports_every_bad_field() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct S { a: u8, b: String, c: Vec<u16> }
    };
    let Err(err) = expand(&input) else {
        return Err(anyhow!("expected expansion to fail"));
    };
    ensure!(err.into_iter().count() == 2, "both bad fields should be reported");
    Ok(())
}
