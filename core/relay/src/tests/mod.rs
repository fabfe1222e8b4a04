//! ユースケースレベルのテスト（ポートをモックで差し替える）

mod relay_tests;
