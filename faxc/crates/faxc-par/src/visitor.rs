//! Visitor contract (component I, §4.7): uniform, read-only dispatch over
//! every composite AST node. `accept` descends into owned children in
//! declaration order; the default `visit_*` methods simply delegate to
//! `accept`, so overriding one method still reaches every descendant unless
//! the override chooses not to call `accept` itself.

use crate::ast::{Alias, Document, Import, ItemStub, Module, PathExpr, Segment, SimplePath, Type, TypeKind};

/// Read-only traversal over a parsed [`Document`]. Mutation of the tree is
/// not supported by this contract.
pub trait Visitor<'src> {
    fn visit_document(&mut self, document: &Document<'src>) {
        document.accept(self);
    }

    fn visit_module(&mut self, module: &Module<'src>) {
        module.accept(self);
    }

    fn visit_import(&mut self, import: &Import<'src>) {
        import.accept(self);
    }

    fn visit_alias(&mut self, alias: &Alias<'src>) {
        alias.accept(self);
    }

    fn visit_object(&mut self, _item: &ItemStub<'src>) {}
    fn visit_function(&mut self, _item: &ItemStub<'src>) {}
    fn visit_extension(&mut self, _item: &ItemStub<'src>) {}
    fn visit_enumeration(&mut self, _item: &ItemStub<'src>) {}
    fn visit_variable(&mut self, _item: &ItemStub<'src>) {}

    fn visit_simple_path(&mut self, _path: &SimplePath<'src>) {}

    fn visit_path_expr(&mut self, path_expr: &PathExpr<'src>) {
        path_expr.accept(self);
    }

    fn visit_type(&mut self, ty: &Type<'src>) {
        ty.accept(self);
    }

    fn visit_segment(&mut self, segment: &Segment<'src>) {
        segment.accept(self);
    }
}

impl<'src> Document<'src> {
    /// Imports first in order, then modules in order.
    pub fn accept<V: Visitor<'src> + ?Sized>(&self, visitor: &mut V) {
        for import in &self.imports {
            visitor.visit_import(import);
        }
        for module in &self.modules {
            visitor.visit_module(module);
        }
    }
}

impl<'src> Module<'src> {
    /// Aliases, enumerations, extensions, functions, objects, variables —
    /// each in declaration order.
    pub fn accept<V: Visitor<'src> + ?Sized>(&self, visitor: &mut V) {
        for alias in &self.aliases {
            visitor.visit_alias(alias);
        }
        for item in &self.enumerations {
            visitor.visit_enumeration(item);
        }
        for item in &self.extensions {
            visitor.visit_extension(item);
        }
        for item in &self.functions {
            visitor.visit_function(item);
        }
        for item in &self.objects {
            visitor.visit_object(item);
        }
        for item in &self.variables {
            visitor.visit_variable(item);
        }
    }
}

impl<'src> Import<'src> {
    pub fn accept<V: Visitor<'src> + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_simple_path(&self.path);
    }
}

impl<'src> Alias<'src> {
    pub fn accept<V: Visitor<'src> + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_type(&self.aliased);
    }
}

impl<'src> PathExpr<'src> {
    pub fn accept<V: Visitor<'src> + ?Sized>(&self, visitor: &mut V) {
        for segment in &self.segments {
            visitor.visit_segment(segment);
        }
    }
}

impl<'src> Type<'src> {
    pub fn accept<V: Visitor<'src> + ?Sized>(&self, visitor: &mut V) {
        for segment in &self.segments {
            visitor.visit_segment(segment);
        }
        match &self.kind {
            TypeKind::Fn { inputs, output } => {
                for input in inputs {
                    visitor.visit_type(input);
                }
                if let Some(output) = output {
                    visitor.visit_type(output);
                }
            }
            TypeKind::Raw | TypeKind::Arr { .. } | TypeKind::Ref { .. } => {}
        }
    }
}

impl<'src> Segment<'src> {
    pub fn accept<V: Visitor<'src> + ?Sized>(&self, visitor: &mut V) {
        if let Segment::Generic { inputs, .. } = self {
            for input in inputs {
                visitor.visit_type(input);
            }
        }
    }
}
