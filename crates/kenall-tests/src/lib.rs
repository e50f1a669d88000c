//! Shared row fixtures for the integration tests and benchmarks.
//!
//! Every constant is one raw line in the distributed layout: unquoted admin
//! code, quoted columns 2–9, unquoted flags. Legacy zips keep their
//! trailing padding so the trim option has something to do.
//!
//! | Fixture           | Street annotation                | Rows out |
//! |-------------------|----------------------------------|----------|
//! | `WHOLE_AREA`      | 以下に掲載がない場合             | 1        |
//! | `PLAIN`           | none                             | 1        |
//! | `RANGE`           | （１～３丁目）                   | 3        |
//! | `FLOOR`           | （１階）                         | 1        |
//! | `FLOOR_UNKNOWN`   | （地階・階層不明）               | 1        |
//! | `LIST`            | （１、３、５丁目）               | 3        |
//! | `NAMES`           | （南、北）                       | 2        |
//! | `WHOLE_TOWN`      | …一円                            | 1        |
//! | `MULTI_ROW`       | three rows, one bracket          | 1        |

pub const WHOLE_AREA: &str = r#"01101,"060  ","0600000","ﾎｯｶｲﾄﾞｳ","ｻｯﾎﾟﾛｼﾁｭｳｵｳｸ","ｲｶﾆｹｲｻｲｶﾞﾅｲﾊﾞｱｲ","北海道","札幌市中央区","以下に掲載がない場合",0,0,0,0,0,0"#;

pub const PLAIN: &str = r#"01101,"064  ","0640941","ﾎｯｶｲﾄﾞｳ","ｻｯﾎﾟﾛｼﾁｭｳｵｳｸ","ｱｻﾋｶﾞｵｶ","北海道","札幌市中央区","旭ケ丘",0,0,1,0,0,0"#;

pub const RANGE: &str = r#"01101,"060  ","0600042","ﾎｯｶｲﾄﾞｳ","ｻｯﾎﾟﾛｼﾁｭｳｵｳｸ","ｵｵﾄﾞｵﾘﾆｼ(1-3ﾁｮｳﾒ)","北海道","札幌市中央区","大通西（１～３丁目）",1,0,1,0,0,0"#;

pub const FLOOR: &str = r#"01101,"060  ","0606201","ﾎｯｶｲﾄﾞｳ","ｻｯﾎﾟﾛｼﾁｭｳｵｳｸ","ｷﾀ5ｼﾞｮｳﾆｼｻｯﾎﾟﾛJRﾀﾜｰｵﾌｨｽﾌﾟﾗｻﾞｻｯﾎﾟﾛ(1ｶｲ)","北海道","札幌市中央区","北五条西ＪＲタワーオフィスプラザさっぽろ（１階）",0,0,0,0,0,0"#;

pub const FLOOR_UNKNOWN: &str = r#"01101,"060  ","0606290","ﾎｯｶｲﾄﾞｳ","ｻｯﾎﾟﾛｼﾁｭｳｵｳｸ","ｷﾀ5ｼﾞｮｳﾆｼｻｯﾎﾟﾛJRﾀﾜｰｵﾌｨｽﾌﾟﾗｻﾞｻｯﾎﾟﾛ(ﾁｶｲ･ｶｲｿｳﾌﾒｲ)","北海道","札幌市中央区","北五条西ＪＲタワーオフィスプラザさっぽろ（地階・階層不明）",0,0,0,0,0,0"#;

pub const LIST: &str = r#"01202,"040  ","0400061","ﾎｯｶｲﾄﾞｳ","ﾊｺﾀﾞﾃｼ","ｻｶｴﾏﾁ(1､3､5ﾁｮｳﾒ)","北海道","函館市","栄町（１、３、５丁目）",0,0,1,0,0,0"#;

pub const NAMES: &str = r#"01206,"085  ","0850046","ﾎｯｶｲﾄﾞｳ","ｸｼﾛｼ","ｵｵﾏﾁ(ﾐﾅﾐ､ｷﾀ)","北海道","釧路市","大町（南、北）",0,0,0,0,0,0"#;

pub const WHOLE_TOWN: &str = r#"01511,"098  ","0983300","ﾎｯｶｲﾄﾞｳ","ｿｳﾔｸﾞﾝｻﾙﾌﾂﾑﾗ","ｻﾙﾌﾂﾑﾗｲﾁｴﾝ","北海道","宗谷郡猿払村","猿払村一円",0,0,0,0,0,0"#;

/// One street name split over three rows. The joined annotation matches
/// no expansion rule, so it collapses to a single bare `協和` row.
pub const MULTI_ROW: [&str; 3] = [
    r#"01224,"066  ","0660005","ﾎｯｶｲﾄﾞｳ","ﾁﾄｾｼ","ｷｮｳﾜ(88-2､271-10､343-2､404-1､427-","北海道","千歳市","協和（８８－２、２７１－１０、３４３－２、４０４－１、４２７－",1,0,0,0,0,0"#,
    r#"01224,"066  ","0660005","ﾎｯｶｲﾄﾞｳ","ﾁﾄｾｼ","3､431-12､443-6､608-2､641-8､814､842-","北海道","千歳市","３、４３１－１２、４４３－６、６０８－２、６４１－８、８１４、８４２－",1,0,0,0,0,0"#,
    r#"01224,"066  ","0660005","ﾎｯｶｲﾄﾞｳ","ﾁﾄｾｼ","5､1137-3､1392､1657､1752ﾊﾞﾝﾁ)","北海道","千歳市","５、１１３７－３、１３９２、１６５７、１７５２番地）",1,0,0,0,0,0"#,
];

/// Join rows into a table, one per line, with a trailing newline.
#[must_use]
pub fn table(rows: &[&str]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

/// Every fixture once, in a fixed order: 11 input rows, 14 output rows.
#[must_use]
pub fn all_fixtures() -> Vec<&'static str> {
    let mut rows = vec![
        WHOLE_AREA,
        PLAIN,
        RANGE,
        FLOOR,
        FLOOR_UNKNOWN,
        LIST,
        NAMES,
        WHOLE_TOWN,
    ];
    rows.extend(MULTI_ROW);
    rows
}

/// A table of `repeats` copies of [`all_fixtures`], for throughput runs.
#[must_use]
pub fn synthetic_table(repeats: usize) -> String {
    let block = table(&all_fixtures());
    block.repeat(repeats)
}
