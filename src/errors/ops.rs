use std::fmt::{self, Display};

/// 比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    LessThan,
}
impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator_name = match self {
            ComparisonOperator::LessThan => "<",
        };
        write!(f, "{}", operator_name)
    }
}

/// 错误大类，对应边界层需要区分的几种失败
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 构建/调用参数不合法
    Config,
    /// 文件无法打开或读写失败
    Io,
    /// 持久化内容格式不合法
    Format,
}
