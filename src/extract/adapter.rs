//! 通用提取逻辑
//!
//! 只依赖元素的 (类型, 文本)，Fountain 解析结果和其它格式转换出的元素序列都走这里。

use std::collections::HashSet;
use crate::models::{ElementKind, ScreenplayElement};
use crate::utils::fountain_constants::UPPERCASE_RUN;

/// 场景列表的整理方式，随来源格式而不同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenePolicy {
    /// 保持文档顺序，不去重
    #[default]
    DocumentOrder,
    /// 转成大写并去重，保持首次出现的顺序
    UppercaseUnique,
}

/// 角色列表：大写、去掉含 `(` 的项、去重、升序
pub fn characters<'a, E, I>(elements: I) -> Vec<String>
where
    E: ScreenplayElement + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen = HashSet::new();
    let mut characters: Vec<String> = elements
        .into_iter()
        .filter(|element| element.kind() == ElementKind::Character)
        .map(|element| element.text().trim().to_uppercase())
        // 带括号的多半是被误判成角色的括号说明
        .filter(|name| !name.is_empty() && !name.contains('('))
        .filter(|name| seen.insert(name.clone()))
        .collect();

    characters.sort();
    characters
}

/// 场景列表
pub fn scenes<'a, E, I>(elements: I, policy: ScenePolicy) -> Vec<String>
where
    E: ScreenplayElement + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let headings = elements
        .into_iter()
        .filter(|element| element.kind() == ElementKind::SceneHeading)
        .map(|element| element.text().trim().to_string());

    match policy {
        ScenePolicy::DocumentOrder => headings.collect(),
        ScenePolicy::UppercaseUnique => {
            let mut seen = HashSet::new();
            headings
                .filter(|scene| !scene.is_empty())
                .map(|scene| scene.to_uppercase())
                .filter(|scene| seen.insert(scene.clone()))
                .collect()
        }
    }
}

/// 动作文本中连续的大写词，排除 `exclude` 中已有的值，去重后升序
pub fn capitalized<'a, E, I>(elements: I, exclude: &[String]) -> Vec<String>
where
    E: ScreenplayElement + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let excluded: HashSet<&str> = exclude.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for element in elements {
        if element.kind() != ElementKind::Action {
            continue;
        }
        for found in UPPERCASE_RUN.find_iter(element.text()) {
            let word = found.as_str().trim();
            // 单个字符(包括冠词 "A" 和 "I")不算强调
            if word.chars().count() < 2 || word == "A" {
                continue;
            }
            if excluded.contains(word) || !seen.insert(word.to_string()) {
                continue;
            }
            words.push(word.to_string());
        }
    }

    words.sort();
    words
}
