//! Single-pass AST traversal that accumulates raw message blocks.

use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{CallExpr, JSXElement, JSXElementChild, Module};
use swc_ecma_visit::{Visit, VisitWith};

use super::block::MessageBlock;
use super::builder::{block_from_attributes, block_from_call};
use super::classify::{is_recognized_call, is_recognized_component};
use crate::config::ResolvedOptions;

/// Walks one module and accumulates raw (pre-merge) message blocks.
///
/// The accumulator lives on the visitor itself and is consumed by
/// [`BlockExtractor::extract`], so each pass owns its state exclusively and
/// nothing is shared between passes.
pub struct BlockExtractor<'a> {
    options: &'a ResolvedOptions,
    source_map: &'a SourceMap,
    blocks: Vec<MessageBlock>,
}

impl<'a> BlockExtractor<'a> {
    pub fn new(options: &'a ResolvedOptions, source_map: &'a SourceMap) -> Self {
        Self {
            options,
            source_map,
            blocks: Vec::new(),
        }
    }

    /// Walk the module and return the raw block list in visit order.
    pub fn extract(mut self, module: &Module) -> Vec<MessageBlock> {
        module.visit_with(&mut self);
        self.blocks
    }

    fn push_with_reference(&mut self, mut block: MessageBlock, lo: BytePos) {
        if let Some(path) = &self.options.reference_path {
            let line = self.source_map.lookup_char_pos(lo).line;
            block.add_reference(format!("{}:{}", path, line));
        }
        self.blocks.push(block);
    }

    fn extract_recognized_element(&mut self, node: &JSXElement) {
        // Elements with children are extracted through their text children
        // instead, so the same element never produces two blocks.
        if node.children.is_empty() {
            if let Some(block) =
                block_from_attributes(&self.options.component_props, &node.opening)
            {
                self.push_with_reference(block, node.opening.span.lo);
            }
            return;
        }

        for child in &node.children {
            let JSXElementChild::JSXText(text) = child else {
                continue;
            };
            let raw_value = &text.value;
            let trimmed = raw_value.trim();
            if trimmed.is_empty() {
                continue;
            }
            // Offset past the leading whitespace so multiline text reports
            // the line the text actually starts on.
            let trim_start_offset = raw_value.len() - raw_value.trim_start().len();
            let text_pos = text.span.lo + BytePos(trim_start_offset as u32);
            // The builder runs on the full attribute set first, so mapped
            // attributes other than the id (comment, context, plural)
            // survive the id override.
            if let Some(mut block) =
                block_from_attributes(&self.options.component_props, &node.opening)
            {
                block.override_id(trimmed);
                self.push_with_reference(block, text_pos);
            }
        }
    }
}

impl Visit for BlockExtractor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if is_recognized_call(&self.options.func_arguments, node)
            && let Some(block) = block_from_call(&self.options.func_arguments, node)
        {
            self.push_with_reference(block, node.span.lo);
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if is_recognized_component(&self.options.component_props, &node.opening) {
            self.extract_recognized_element(node);
        }
        node.visit_children_with(self);
    }
}
