//! Builds one canonical [`Module`] record from a source file.
//!
//! The builder recognizes exactly four top-level declaration kinds - imports,
//! namespace re-exports, named exports, and default exports. Anything else in
//! the file passes through silently; this is a graph extractor, not a
//! validator.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingPatternKind, Declaration, ImportDeclarationSpecifier, ModuleDeclaration,
    ModuleExportName, Program,
};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};
use thiserror::Error;

use super::{Module, PathResolver};

/// A file whose syntax tree could not be produced. Fatal to the whole
/// analysis run - the engine never sees a partial module.
#[derive(Debug, Error)]
#[error("failed to parse module '{path}': {message}")]
pub struct ParseError {
    pub path: String,
    pub message: String,
}

/// Parse `source_text` and extract the module record for `path`.
///
/// `path` must already be canonical (project-relative, extension stripped);
/// it becomes the record's primary key and the base for relative specifier
/// resolution.
pub fn build_module(
    path: &str,
    source_text: &str,
    source_type: SourceType,
    resolver: &PathResolver,
) -> Result<Module, ParseError> {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source_text, source_type).parse();

    if let Some(error) = parsed.errors.first() {
        return Err(ParseError {
            path: path.to_string(),
            message: error.to_string(),
        });
    }

    let lines = LineIndex::new(source_text);
    Ok(collect_module(path, &parsed.program, &lines, resolver))
}

/// Walk an already-parsed program and produce the module record.
pub fn collect_module(
    path: &str,
    program: &Program<'_>,
    lines: &LineIndex,
    resolver: &PathResolver,
) -> Module {
    let mut module = Module::new(path);

    for statement in &program.body {
        let Some(declaration) = statement.as_module_declaration() else {
            continue;
        };

        match declaration {
            ModuleDeclaration::ImportDeclaration(import) => {
                let source = resolver.resolve(path, import.source.value.as_str());

                match &import.specifiers {
                    Some(specifiers) if !specifiers.is_empty() => {
                        for specifier in specifiers {
                            let line = lines.line_of(specifier.span().start);
                            match specifier {
                                ImportDeclarationSpecifier::ImportSpecifier(named) => {
                                    let imported = export_name(&named.imported);
                                    if imported == "default" {
                                        module.add_default_import(source.clone(), line);
                                    } else {
                                        module.add_named_import(imported, source.clone(), line);
                                    }
                                }
                                ImportDeclarationSpecifier::ImportDefaultSpecifier(_) => {
                                    module.add_default_import(source.clone(), line);
                                }
                                ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => {
                                    module.add_batch_import(source.clone(), line);
                                }
                            }
                        }
                    }
                    // `import './module'` - no bindings, imported for effect.
                    _ => module.add_side_effect_import(source, lines.line_of(import.span.start)),
                }
            }
            ModuleDeclaration::ExportAllDeclaration(all) => {
                let source = resolver.resolve(path, all.source.value.as_str());
                module.add_batch_export(source, lines.line_of(all.span.start));
            }
            ModuleDeclaration::ExportNamedDeclaration(named) => {
                if let Some(src) = &named.source {
                    // `export { a as b } from './module'` is both a named
                    // import of `a` and an export of `b`.
                    for specifier in &named.specifiers {
                        let source = resolver.resolve(path, src.value.as_str());
                        let line = lines.line_of(specifier.span.start);
                        module.add_re_export(
                            &export_name(&specifier.exported),
                            &export_name(&specifier.local),
                            source,
                            line,
                        );
                    }
                } else if let Some(declaration) = &named.declaration {
                    collect_declaration_exports(&mut module, declaration, lines);
                } else {
                    for specifier in &named.specifiers {
                        let line = lines.line_of(specifier.span.start);
                        let exported = export_name(&specifier.exported);
                        if exported == "default" {
                            module.add_default_export(line);
                        } else {
                            module.add_named_export(exported, line);
                        }
                    }
                }
            }
            ModuleDeclaration::ExportDefaultDeclaration(default) => {
                module.add_default_export(lines.line_of(default.span.start));
            }
            _ => {}
        }
    }

    module
}

/// `export function f() {}`, `export const a = 1, b = 2`, `export class C {}`
/// - one named export per declared identifier.
fn collect_declaration_exports(module: &mut Module, declaration: &Declaration<'_>, lines: &LineIndex) {
    match declaration {
        Declaration::FunctionDeclaration(function) => {
            if let Some(id) = &function.id {
                module.add_named_export(id.name.as_str(), lines.line_of(id.span.start));
            }
        }
        Declaration::VariableDeclaration(variable) => {
            for declarator in &variable.declarations {
                if let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind {
                    module.add_named_export(ident.name.as_str(), lines.line_of(ident.span.start));
                }
            }
        }
        Declaration::ClassDeclaration(class) => {
            if let Some(id) = &class.id {
                module.add_named_export(id.name.as_str(), lines.line_of(id.span.start));
            }
        }
        _ => {}
    }
}

fn export_name(name: &ModuleExportName) -> String {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
        ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
        ModuleExportName::StringLiteral(literal) => literal.value.to_string(),
    }
}

/// Byte-offset to 1-based line lookup over one file's source text.
#[derive(Debug)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = Vec::with_capacity(128);
        line_starts.push(0);
        for (idx, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push((idx + 1) as u32);
            }
        }
        Self { line_starts }
    }

    pub fn line_of(&self, offset: u32) -> u32 {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        };
        idx as u32 + 1
    }
}
