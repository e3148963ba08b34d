//! Built-in skill table: the 7e investigator skill list with base values.

use crate::entities::{SkillCategory, SkillDefinition, SkillTable};
use crate::game_systems::coc7e::language::LanguageFamily;
use crate::value_objects::LANGUAGE_SKILL;

use SkillCategory::{Combat, Knowledge, Perception, Physical, Practical, Social};

/// `(name, base, category, description)`
const SKILLS: &[(&str, i32, SkillCategory, &str)] = &[
    ("会计", 5, Knowledge, "处理财务记录，发现账目中的不规则之处。"),
    ("人类学", 1, Knowledge, "理解不同文化的习俗、信仰和社会结构。"),
    ("估价", 5, Knowledge, "估计物品的价值、年代和真伪。"),
    ("考古学", 1, Knowledge, "鉴定古代遗物，了解发掘与古代文明。"),
    ("艺术与手艺", 5, Practical, "创作或鉴赏某一门艺术或手艺。"),
    ("取悦", 15, Social, "以魅力、奉承或好感打动他人。"),
    ("攀爬", 20, Physical, "攀爬墙壁、悬崖、绳索等。"),
    ("计算机使用", 5, Knowledge, "操作计算机并检索信息。"),
    ("信用评级", 0, Social, "经济状况与社会地位的量度。"),
    ("克苏鲁神话", 0, Knowledge, "关于神话存在与禁忌知识的了解。"),
    ("乔装", 5, Social, "改变外貌、举止和声音以扮作他人。"),
    ("闪避", 0, Physical, "躲开攻击和飞来的物体。基础值为敏捷的一半。"),
    ("汽车驾驶", 20, Practical, "驾驶汽车或轻型卡车。"),
    ("电气维修", 10, Practical, "修理和改装电气设备。"),
    ("电子学", 1, Practical, "诊断和修理电子设备。"),
    ("话术", 5, Social, "用花言巧语使他人暂时相信某事。"),
    ("格斗", 25, Combat, "近身搏斗与近战武器。"),
    ("射击", 20, Combat, "使用各类枪械与射击武器。"),
    ("急救", 30, Practical, "对伤者进行紧急处理。"),
    ("历史", 5, Knowledge, "了解某地、某人或某物的历史。"),
    ("恐吓", 15, Social, "以威胁或暴力迫使他人服从。"),
    ("跳跃", 20, Physical, "跳高、跳远，或从高处安全落下。"),
    ("母语", 0, Knowledge, "调查员的第一语言。基础值等于教育。"),
    ("语言", 1, Knowledge, "母语以外的语言。"),
    ("法律", 5, Knowledge, "了解法律、诉讼程序与判例。"),
    ("图书馆使用", 20, Knowledge, "在图书馆或档案中查找资料。"),
    ("聆听", 20, Perception, "察觉声音，偷听谈话。"),
    ("锁匠", 1, Practical, "打开锁具、修理锁具。"),
    ("机械维修", 10, Practical, "修理损坏的机器，制作简单装置。"),
    ("医学", 1, Knowledge, "诊断和治疗疾病与伤势。"),
    ("博物学", 10, Knowledge, "关于动植物与自然环境的传统知识。"),
    ("导航", 10, Perception, "在陌生环境中辨认方向。"),
    ("神秘学", 5, Knowledge, "了解神秘学传统、魔法与传说。"),
    ("操作重型机械", 1, Practical, "驾驶和操作重型机械。"),
    ("说服", 10, Social, "以理由和论证改变他人的想法。"),
    ("驾驶", 1, Practical, "驾驶飞行器或船只。"),
    ("精神分析", 1, Knowledge, "治疗精神疾病，帮助恢复理智。"),
    ("心理学", 10, Perception, "观察他人并判断其动机与性格。"),
    ("骑乘", 5, Physical, "骑马或骑乘其他牲畜。"),
    ("科学", 1, Knowledge, "某一门科学学科的专门知识。"),
    ("妙手", 10, Practical, "扒窃、藏匿物品、戏法。"),
    ("侦查", 25, Perception, "发现隐藏的线索和异常之处。"),
    ("潜行", 20, Physical, "悄无声息地移动和隐藏。"),
    ("生存", 10, Practical, "在特定的恶劣环境中生存。"),
    ("游泳", 20, Physical, "在水中游动。"),
    ("投掷", 20, Combat, "准确地投掷物体。"),
    ("追踪", 10, Perception, "循着足迹和痕迹追踪。"),
    ("驯兽", 5, Practical, "驯服和指挥动物。"),
    ("潜水", 1, Physical, "使用潜水装备在水下活动。"),
    ("爆破", 1, Practical, "安全地布置和拆除爆炸物。"),
    ("读唇", 1, Perception, "通过观察嘴唇读出对话。"),
    ("催眠", 1, Social, "使目标进入恍惚状态。"),
    ("炮术", 1, Combat, "操作火炮等重型武器。"),
];

/// `(main, [(specialization, base override)])`. `None` keeps the main base.
const SPECIALIZATIONS: &[(&str, &[(&str, Option<i32>)])] = &[
    (
        "艺术与手艺",
        &[
            ("表演", None),
            ("美术", None),
            ("摄影", None),
            ("文学", None),
            ("乐器", None),
            ("烹饪", None),
            ("技术制图", None),
            ("打字", None),
            ("书法", None),
            ("木匠", None),
            ("雕塑", None),
            ("伪造", None),
        ],
    ),
    (
        "格斗",
        &[
            ("斗殴", None),
            ("剑", Some(20)),
            ("斧", Some(15)),
            ("链枷", Some(10)),
            ("绞索", Some(15)),
            ("鞭", Some(5)),
            ("矛", Some(20)),
            ("电锯", Some(10)),
        ],
    ),
    (
        "射击",
        &[
            ("手枪", None),
            ("步枪/霰弹枪", Some(25)),
            ("弓术", Some(15)),
            ("冲锋枪", Some(15)),
            ("机枪", Some(10)),
            ("重武器", Some(10)),
            ("火焰喷射器", Some(10)),
        ],
    ),
    (
        "科学",
        &[
            ("天文学", None),
            ("生物学", None),
            ("植物学", None),
            ("化学", None),
            ("密码学", None),
            ("工程学", None),
            ("司法科学", None),
            ("地质学", None),
            ("数学", None),
            ("气象学", None),
            ("药学", None),
            ("物理学", None),
            ("动物学", None),
        ],
    ),
    (
        "生存",
        &[("沙漠", None), ("海洋", None), ("极地", None), ("山地", None), ("丛林", None)],
    ),
    ("驾驶", &[("飞行器", None), ("船", None)]),
];

pub(super) fn builtin_skills() -> SkillTable {
    let mut table: SkillTable = SKILLS
        .iter()
        .map(|(name, base, category, description)| {
            let mut definition =
                SkillDefinition::new(*base, *category).with_description(*description);
            if let Some((_, specs)) = SPECIALIZATIONS.iter().find(|(main, _)| main == name) {
                definition = definition.with_specializations(specs.iter().map(|(s, _)| *s));
                for (spec, base) in specs.iter() {
                    if let Some(base) = base {
                        definition = definition.with_specialization_base(*spec, *base);
                    }
                }
            }
            ((*name).to_string(), definition)
        })
        .collect();

    if let Some(language) = table.get(LANGUAGE_SKILL).cloned() {
        let mut language = language.with_specializations(
            LanguageFamily::ALL
                .iter()
                .flat_map(|family| family.languages().iter().copied()),
        );
        language.language_families = LanguageFamily::ALL
            .iter()
            .map(|family| {
                (
                    family.name().to_string(),
                    family.languages().iter().map(|l| (*l).to_string()).collect(),
                )
            })
            .collect();
        table.insert(LANGUAGE_SKILL, language);
    }

    table
}
