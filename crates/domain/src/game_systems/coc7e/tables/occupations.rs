//! Built-in occupation table.
//!
//! Skill names here match the built-in skill table exactly, so every fixed
//! entry resolves to a known skill.

use std::collections::BTreeMap;

use crate::entities::{OccupationRecord, OccupationTable};

const SOCIAL: &str = "一种社交技能（取悦、话术、恐吓或说服）";
const EDU4: &str = "教育×4";
const EDU_DEX: &str = "教育×2+敏捷×2";
const EDU_APP: &str = "教育×2+外貌×2";
const EDU_STR: &str = "教育×2+力量×2";
const EDU_DEX_STR: &str = "教育×2+敏捷×2或力量×2";

/// `(name, description, skills, credit rating, skill point formula)`
type Row = (&'static str, &'static str, &'static [&'static str], (i32, i32), &'static str);

#[rustfmt::skip]
const OCCUPATIONS: &[Row] = &[
    ("古文物学家", "【原作向】", &["估价", "艺术与手艺（任一）", "历史", "图书馆使用", "其他语言", SOCIAL, "侦查", "自选一技能"], (30, 70), EDU4),
    ("艺术家", "", &["艺术与手艺（任一）", "历史或博物学", SOCIAL, "其他语言", "心理学", "侦查", "自选二技能"], (9, 50), EDU_DEX),
    ("运动员", "", &["攀爬", "跳跃", "格斗（斗殴）", "骑乘或游泳", SOCIAL, "投掷", "自选二技能"], (9, 70), EDU_DEX_STR),
    ("作家", "【原作向】", &["艺术与手艺（文学）", "历史", "图书馆使用", "博物学或神秘学", "其他语言", "心理学", "自选二技能"], (9, 30), EDU4),
    ("酒保", "", &["会计", "取悦", "格斗（斗殴）", "聆听", "心理学", "侦查", "自选二技能"], (8, 25), EDU_APP),
    ("猎人", "", &["射击（弓术）或射击（步枪/霰弹枪）", "潜行", "聆听", "博物学", "导航", "生存（任一）", "追踪", "自选一技能"], (20, 50), EDU_DEX_STR),
    ("书商", "", &["会计", "估价", "艺术与手艺（任一）", "历史", "图书馆使用", "其他语言", "说服", "自选一技能"], (20, 40), EDU4),
    ("赏金猎人", "", &["汽车驾驶", "电气维修", "格斗（斗殴）", "射击（任一）", "恐吓", "法律", "心理学", "追踪"], (9, 30), EDU_DEX_STR),
    ("神职人员", "", &["会计", "历史", "图书馆使用", "聆听", "其他语言", "说服", "心理学", "自选一技能"], (9, 60), EDU4),
    ("计算机程序员", "", &["计算机使用", "电气维修", "电子学", "图书馆使用", SOCIAL, "侦查", "自选二技能"], (10, 70), EDU4),
    ("罪犯", "", &["艺术与手艺（表演）", "乔装", "格斗（斗殴）", "射击（手枪）", "恐吓", "锁匠", "妙手", "潜行"], (5, 65), EDU_DEX),
    ("厨师", "", &["会计", "艺术与手艺（烹饪）", "取悦", "格斗（斗殴）", "聆听", "博物学", "侦查", "自选一技能"], (9, 40), EDU_DEX),
    ("设计师", "", &["会计", "艺术与手艺（任一）", "计算机使用", "艺术与手艺（技术制图）", "历史", "图书馆使用", "说服", "侦查"], (20, 60), EDU_DEX),
    ("业余艺术爱好者", "", &["艺术与手艺（任一）", "历史", "图书馆使用", "其他语言", SOCIAL, "自选三技能"], (50, 99), EDU_APP),
    ("医生", "", &["急救", "其他语言（拉丁语）", "医学", "心理学", "科学（生物学）", "科学（药学）", "自选二技能"], (30, 80), EDU4),
    ("司机", "", &["机械维修", "导航", SOCIAL, "汽车驾驶", "电气维修", "聆听", "自选二技能"], (9, 20), EDU_DEX),
    ("编辑", "", &["艺术与手艺（摄影）", "历史", "图书馆使用", "其他语言", SOCIAL, "心理学", "自选二技能"], (10, 30), EDU4),
    ("工程师", "", &["艺术与手艺（技术制图）", "电气维修", "机械维修", "操作重型机械", "科学（物理学）", "自选三技能"], (30, 60), EDU4),
    ("艺人", "", &["艺术与手艺（任一）", "乔装", "取悦", "聆听", "心理学", "自选三技能"], (9, 70), EDU_APP),
    ("农民", "", &["艺术与手艺（任一）", "驯兽", "机械维修", "博物学", "操作重型机械", "科学（植物学）", "自选二技能"], (9, 30), EDU_DEX_STR),
    ("特工", "", &["艺术与手艺（摄影）", "乔装", "电气维修", "聆听", "其他语言", "心理学", "妙手", "潜行"], (20, 60), "教育×2+外貌×2或敏捷×2"),
    ("消防员", "", &["攀爬", "闪避", "急救", "格斗（斗殴）", "机械维修", "操作重型机械", "投掷", "自选一技能"], (9, 30), EDU_STR),
    ("赌徒", "", &["会计", "取悦", "话术", "聆听", "心理学", "侦查", "妙手", "自选一技能"], (9, 50), "教育×2+外貌×2或敏捷×2"),
    ("黑帮成员", "", &["格斗（斗殴）", "射击（手枪）", "恐吓", "一种社交技能（取悦、话术或说服）", "汽车驾驶", "聆听", "妙手", "潜行"], (9, 50), "教育×2+力量×2或敏捷×2"),
    ("绅士/淑女", "", &["艺术与手艺（任一）", "历史", "其他语言", "骑乘", SOCIAL, "自选三技能"], (40, 90), EDU_APP),
    ("游民", "", &["攀爬", "跳跃", "聆听", "导航", SOCIAL, "潜行", "生存（任一）", "游泳"], (0, 5), EDU_DEX_STR),
    ("记者", "【原作向】", &["艺术与手艺（摄影）", "历史", "图书馆使用", "其他语言", SOCIAL, "心理学", "自选二技能"], (9, 30), EDU4),
    ("律师", "", &["会计", "法律", "图书馆使用", SOCIAL, "心理学", "自选三技能"], (30, 80), EDU4),
    ("图书馆管理员", "【原作向】", &["会计", "图书馆使用", "其他语言", "自选五技能"], (9, 35), EDU4),
    ("技师", "", &["艺术与手艺（技术制图）", "电气维修", "图书馆使用", "机械维修", "操作重型机械", "科学（物理学）", "自选二技能"], (9, 40), EDU4),
    ("军官", "", &["会计", "射击（步枪/霰弹枪）", "恐吓", "导航", "说服", "心理学", "生存（任一）", "自选一技能"], (20, 70), EDU_DEX_STR),
    ("传教士", "", &["艺术与手艺（任一）", "急救", "机械维修", "医学", "博物学", "说服", "心理学", "生存（任一）"], (0, 30), EDU4),
    ("音乐家", "", &["艺术与手艺（乐器）", "取悦", "聆听", "心理学", "自选四技能"], (9, 30), EDU_DEX),
    ("护士", "", &["急救", "聆听", "医学", "心理学", "科学（生物学）", "侦查", "自选二技能"], (9, 30), EDU4),
    ("神秘学家", "", &["人类学", "历史", "图书馆使用", "神秘学", "其他语言", SOCIAL, "心理学", "自选一技能"], (9, 65), EDU4),
    ("探险家", "", &["攀爬", "射击（步枪/霰弹枪）", "历史", "跳跃", "博物学", "导航", "生存（任一）", "游泳"], (30, 70), EDU_DEX_STR),
    ("摄影师", "", &["艺术与手艺（摄影）", "取悦", "心理学", "侦查", "潜行", "自选三技能"], (9, 30), EDU4),
    ("飞行员", "", &["电气维修", "机械维修", "导航", "操作重型机械", "驾驶（飞行器）", "科学（天文学）", "生存（任一）", "自选一技能"], (20, 70), EDU_DEX),
    ("警察", "", &["艺术与手艺（表演）", "格斗（斗殴）", "射击（手枪）", "急救", "恐吓", "法律", "心理学", "追踪"], (9, 30), "教育×2+力量×2或敏捷×2"),
    ("私家侦探", "", &["艺术与手艺（摄影）", "乔装", "法律", "图书馆使用", "说服", "心理学", "侦查", "潜行"], (9, 30), EDU_DEX_STR),
    ("教授", "【原作向】", &["图书馆使用", "其他语言", "自选六技能"], (20, 70), EDU4),
    ("精神病医生", "【原作向】", &["聆听", "医学", "其他语言", "心理学", "精神分析", "自选三技能"], (30, 80), EDU4),
    ("研究员", "", &["图书馆使用", "其他语言", "自选六技能"], (9, 30), EDU4),
    ("水手", "", &["艺术与手艺（任一）", "格斗（斗殴）", "机械维修", "博物学", "导航", "驾驶（船）", "游泳", "投掷"], (9, 30), EDU_DEX_STR),
    ("推销员", "", &["会计", "取悦", "话术", "汽车驾驶", "聆听", "心理学", "自选二技能"], (9, 40), EDU_APP),
    ("科学家", "", &["图书馆使用", "其他语言", "科学（任一）", "科学（任一）", "科学（任一）", "自选三技能"], (9, 70), EDU4),
    ("秘书", "", &["会计", "艺术与手艺（打字）", "取悦", "历史", "图书馆使用", "其他语言", "说服", "自选一技能"], (9, 30), EDU4),
    ("店老板", "", &["会计", "取悦", "格斗（斗殴）", "聆听", "说服", "心理学", "侦查", "自选一技能"], (20, 40), EDU_APP),
    ("士兵", "", &["攀爬", "闪避", "格斗（斗殴）", "射击（步枪/霰弹枪）", "潜行", "生存（任一）", "游泳", "投掷"], (9, 30), EDU_DEX_STR),
    ("部落成员", "", &["攀爬", "格斗（斗殴）", "聆听", "博物学", "导航", "侦查", "生存（任一）", "游泳或投掷"], (0, 15), EDU_DEX_STR),
    ("殡葬师", "", &["会计", "艺术与手艺（任一）", "汽车驾驶", "历史", "说服", "心理学", "科学（生物学）", "自选一技能"], (20, 40), EDU4),
    ("工会活动家", "", &["会计", "格斗（斗殴）", "历史", "恐吓", "聆听", "说服", "心理学", "自选一技能"], (9, 50), "教育×2+外貌×2或力量×2"),
    ("服务生", "", &["会计", "艺术与手艺（任一）", "取悦", "聆听", "其他语言", "心理学", "侦查", "自选一技能"], (9, 20), EDU_APP),
    ("白领工人", "", &["会计", "取悦", "法律", "聆听", "说服", "心理学", "自选二技能"], (9, 50), EDU4),
    ("狂热者", "", &["历史", "恐吓", "说服", "心理学", "潜行", "自选三技能"], (0, 30), EDU_APP),
    ("动物园管理员", "", &["会计", "驯兽", "闪避", "格斗（斗殴）", "急救", "博物学", "科学（动物学）", "医学"], (9, 40), EDU4),
];

pub(super) fn builtin_occupation_records() -> BTreeMap<String, OccupationRecord> {
    OCCUPATIONS
        .iter()
        .map(|(name, description, skills, credit_rating, formula)| {
            (
                (*name).to_string(),
                OccupationRecord {
                    description: (*description).to_string(),
                    skills: skills.iter().map(|s| (*s).to_string()).collect(),
                    credit_rating: *credit_rating,
                    skill_points: (*formula).to_string(),
                },
            )
        })
        .collect()
}

/// Built-in rows always parse.
pub(super) fn builtin_occupations() -> OccupationTable {
    let (table, _rejected) = OccupationTable::from_records(&builtin_occupation_records());
    table
}
