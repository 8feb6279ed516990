use std::collections::HashMap;
use serde::{Serialize, Serializer};
use crate::models::element::{Element, ElementKind};

/// 元素仓库
///
/// 按文档顺序追加保存元素，元素一旦加入便不会删除或重排。
/// `last_index` 记录每种类型最近一次出现的位置，所以查找“最后一个某类型元素”
/// 不需要倒序扫描；修改通过索引或可变引用完成，不会复制出元素副本。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStore {
    elements: Vec<Element>,
    last_index: HashMap<ElementKind, usize>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加元素，返回其索引
    pub fn append(&mut self, element: Element) -> usize {
        let index = self.elements.len();
        self.last_index.insert(element.kind(), index);
        self.elements.push(element);
        index
    }

    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Element> {
        self.elements.last_mut()
    }

    /// 某类型最近一次出现的索引；索引 0 同样是“找到”
    pub fn last_index_of_kind(&self, kind: ElementKind) -> Option<usize> {
        self.last_index.get(&kind).copied()
    }

    pub fn last_of_kind(&self, kind: ElementKind) -> Option<&Element> {
        self.last_index_of_kind(kind)
            .and_then(|index| self.elements.get(index))
    }

    pub fn last_of_kind_mut(&mut self, kind: ElementKind) -> Option<&mut Element> {
        match self.last_index_of_kind(kind) {
            Some(index) => self.elements.get_mut(index),
            None => None,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a ElementStore {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<Element> for ElementStore {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut store = ElementStore::new();
        for element in iter {
            store.append(element);
        }
        store
    }
}

// 只输出元素序列，索引表可以由序列重建
impl Serialize for ElementStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.elements.serialize(serializer)
    }
}
