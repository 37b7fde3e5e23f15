// ==========================================
// SpaceX 发射记录驾驶舱 - 过滤引擎
// ==========================================
// 输入: 任意记录序列（借用）
// 输出: 保序子集,只删除不重排
// 红线: 未知发射场返回空集,不报错
// ==========================================

use crate::domain::launch::LaunchRecord;
use crate::domain::selection::{PayloadRange, Selection, SiteSelection};

/// 按发射场过滤
///
/// - `SiteSelection::All`: 原样返回全部记录
/// - `SiteSelection::Site(name)`: 仅保留 `launch_site == name`
pub fn filter_by_site<'a, I>(records: I, site: &SiteSelection) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    match site {
        SiteSelection::All => records.into_iter().collect(),
        SiteSelection::Site(name) => records
            .into_iter()
            .filter(|r| r.launch_site == *name)
            .collect(),
    }
}

/// 按载荷闭区间过滤（low ≤ payload ≤ high）
pub fn filter_by_payload<'a, I>(records: I, range: &PayloadRange) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .collect()
}

/// 散点图组合过滤: 先载荷,后发射场
pub fn filter_for_scatter<'a, I>(records: I, selection: &Selection) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    let by_payload = filter_by_payload(records, &selection.payload_range);
    filter_by_site(by_payload, &selection.site)
}
