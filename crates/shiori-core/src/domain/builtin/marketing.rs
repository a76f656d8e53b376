//! `marketing_data.csv`: channel ROI and monthly conversion rate.

use super::dataset_profile;
use crate::domain::{DomainId, DomainProfile};
use crate::rule::{ChartKind, ResponseTemplate, Rule};

const BEST_CHANNEL: &str = "\
最もROIが高いチャネルは**メルマガ**（450%）です。

**上位チャネル**

| 順位 | チャネル | ROI |
|------|----------|-----|
| 1 | メルマガ | 450% |
| 2 | SNS広告 | 320% |
| 3 | リスティング | 280% |

※ ディスプレイ広告（120%）は配分の見直しを検討してください。";

const ROI: &str = "\
チャネル別のROIを比較しました。

**チャネル別ROI**

| チャネル | ROI |
|----------|-----|
| SNS広告 | 320% |
| リスティング | 280% |
| メルマガ | 450% |
| アフィリエイト | 180% |
| ディスプレイ | 120% |

**示唆**
1. メルマガは低コストで高いリターンを維持しています
2. ディスプレイ広告は他チャネルに比べて効率が低めです

※ ROI = (売上 - 広告費) / 広告費 × 100 で算出しています。";

const CONVERSION: &str = "\
コンバージョン率の推移です。

**月別コンバージョン率**

| 月 | CVR |
|----|-----|
| 1月 | 2.1% |
| 2月 | 2.3% |
| 3月 | 2.8% |
| 4月 | 3.2% |
| 5月 | 3.5% |
| 6月 | 4.1% |

6ヶ月で2.0ポイント改善し、1月の約2倍になりました。

※ LP改善施策の実施は3月からです。";

pub fn profile() -> DomainProfile {
    dataset_profile(
        DomainId::Marketing,
        "マーケティングデータ分析",
        "marketing_data.csv",
        vec![
            Rule::new(
                "marketing-best-channel",
                ["最も", "一番", "ベスト", "おすすめ"],
                ResponseTemplate::with_chart(BEST_CHANNEL, ChartKind::MarketingRoi),
            )
            .requiring("チャネル"),
            Rule::new(
                "marketing-roi",
                ["ROI", "費用対効果", "チャネル", "広告"],
                ResponseTemplate::with_chart(ROI, ChartKind::MarketingRoi),
            ),
            Rule::new(
                "marketing-conversion",
                ["コンバージョン", "CV", "転換", "成約"],
                ResponseTemplate::with_chart(CONVERSION, ChartKind::MarketingConversion),
            ),
        ],
        &[
            "チャネル別のROIを比較して",
            "最も効果の高いチャネルは？",
            "コンバージョン率の推移は？",
        ],
    )
}
