//! Integration tests for Visual Basic declaration rendering.

mod common;

use common::*;
use declscope::{prelude::*, Error};

fn renderer() -> Renderer<'static> {
    init_logging();
    Renderer::new(&VISUAL_BASIC)
}

#[test]
fn add_signature_and_body() -> Result<()> {
    let vb = renderer();
    let add = add_method();

    assert_eq!(
        vb.render_method_signature(&add)?,
        "Function Add(ByVal a As Integer, ByVal b As Integer) As Integer"
    );
    assert_eq!(
        vb.render_method(&add)?,
        "Function Add(ByVal a As Integer, ByVal b As Integer) As Integer\n    Return Nothing\nEnd Function\n"
    );
    Ok(())
}

#[test]
fn shared_procedure_has_no_return_clause() -> Result<()> {
    let vb = renderer();
    let text = vb.render_method(&reset_method())?;

    assert!(text.starts_with("Shared Sub Reset()\n"));
    assert!(!text.contains(" As "));
    assert!(!text.contains("Return"));
    assert!(text.ends_with("End Sub\n"));
    Ok(())
}

#[test]
fn by_ref_parameter_uses_byref() -> Result<()> {
    let vb = renderer();
    assert_eq!(
        vb.render_method_signature(&try_parse_method())?,
        "Shared Function TryParse(ByVal text As String, ByRef value As Integer) As Boolean"
    );
    Ok(())
}

#[test]
fn nested_generics_and_arrays() -> Result<()> {
    let vb = renderer();
    let text = vb.render_method_signature(&group_method())?;

    assert_eq!(
        text,
        "Function Group(ByVal values As Integer()) As System.Collections.Generic.Dictionary(Of String, System.Collections.Generic.List(Of Integer))"
    );
    assert!(!text.contains('`'));
    Ok(())
}

#[test]
fn field_declaration() -> Result<()> {
    let vb = renderer();
    let field = FieldDefinition::new("names", TypeReference::array(string(), 2));
    assert_eq!(vb.render_field(&field)?, "Dim names As String(,)");
    Ok(())
}

#[test]
fn unqualified_names() -> Result<()> {
    let vb = Renderer::with_config(
        &VISUAL_BASIC,
        RenderConfig::default().with_namespaces(false),
    );
    assert_eq!(
        vb.render_method_signature(&group_method())?,
        "Function Group(ByVal values As Integer()) As Dictionary(Of String, List(Of Integer))"
    );
    Ok(())
}

#[test]
fn self_referential_constraint() {
    let (_registry, max) = self_constrained_max();

    let legacy = renderer();
    assert!(matches!(
        legacy.render_method_signature(&max),
        Err(Error::RenderDepthExceeded(64))
    ));

    let strict = Renderer::with_config(&VISUAL_BASIC, RenderConfig::strict());
    assert_eq!(
        strict.render_method_signature(&max).unwrap(),
        "Function Max(Of T As {System.IComparable(Of T)})(ByVal a As T, ByVal b As T) As T"
    );
}

#[test]
fn multiline_parameters_use_line_continuation() -> Result<()> {
    let vb = Renderer::with_config(
        &VISUAL_BASIC,
        RenderConfig::default().with_multiline_parameters(true),
    );
    assert_eq!(
        vb.render_method_signature(&try_parse_method())?,
        "Shared Function TryParse(ByVal text As String, _\n    ByRef value As Integer) As Boolean"
    );
    Ok(())
}

#[test]
fn source_generation_is_unsupported() {
    let vb = renderer();
    let references = [AssemblyReference::new("mscorlib", (4, 0, 0, 0))];
    assert!(matches!(
        vb.generate_source_code(&add_method(), &references),
        Err(Error::UnsupportedOperation(_))
    ));
}
