//! 问题模块单元测试
